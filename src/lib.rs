#[allow(non_snake_case)]
pub mod Electrochemistry;
#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod Processes;
#[allow(non_snake_case)]
pub mod Spectroscopy;
#[allow(non_snake_case)]
pub mod Stoichiometry;
#[allow(non_snake_case)]
pub mod Utils;
pub mod constants;
