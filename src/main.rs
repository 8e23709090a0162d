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

use Examples::spectroscopy_examples::spectroscopy_examples;
use Examples::stoichiometry_examples::stoichiometry_examples;
use Utils::logger::init_console_logger;
use simplelog::LevelFilter;

pub fn main() {
    //
    init_console_logger(LevelFilter::Info);
    let task: usize = 2;
    stoichiometry_examples(task);
}
