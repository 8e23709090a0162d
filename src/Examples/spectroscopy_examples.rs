use crate::Spectroscopy::analysis::{
    analyze_ir_spectrum, analyze_nmr_spectrum, analyze_uv_vis_spectrum, pretty_print_peaks,
};
use crate::Spectroscopy::chromatogram::{generate_chromatogram, generate_mass_spectrum};
use crate::Spectroscopy::synthesis::{
    generate_ir_spectrum, generate_nmr_spectrum, generate_uv_vis_spectrum,
};

pub fn spectroscopy_examples(task: usize) {
    match task {
        0 => {
            // IR SPECTRUM OF AN ALCOHOL WITH A CARBONYL IMPURITY
            let mut rng = rand::rng();
            let bands = ["O-H stretch", "C-H stretch", "C=O stretch"];
            let (wavenumbers, absorbance) =
                generate_ir_spectrum(&bands, None, &mut rng).unwrap();
            let peaks = analyze_ir_spectrum(&wavenumbers, &absorbance);
            println!("found {} IR peaks", peaks.len());
            pretty_print_peaks(&peaks);
        }
        1 => {
            // UV-VIS SPECTRUM OF A CONJUGATED CARBONYL
            let mut rng = rand::rng();
            let (wavelengths, absorbance) =
                generate_uv_vis_spectrum(&["C=C", "C=O"], Some(0.01), &mut rng).unwrap();
            let peaks = analyze_uv_vis_spectrum(&wavelengths, &absorbance);
            for peak in &peaks {
                println!(
                    "chromophore {} at {:?} nm, width {:?} samples",
                    peak.assignment, peak.position, peak.width
                );
            }
            pretty_print_peaks(&peaks);
        }
        2 => {
            // 1H NMR OF A SIMPLE AROMATIC ALCOHOL
            let mut rng = rand::rng();
            let (shifts, intensity) =
                generate_nmr_spectrum(&["CH3", "OH", "Aromatic"], None, &mut rng).unwrap();
            let peaks = analyze_nmr_spectrum(&shifts, &intensity);
            pretty_print_peaks(&peaks);
        }
        3 => {
            // CHROMATOGRAM AND MASS SPECTRUM
            let (time, signal) = generate_chromatogram();
            let max_signal = signal.iter().cloned().fold(f64::MIN, f64::max);
            let argmax = signal.iter().position(|&y| y == max_signal).unwrap();
            println!(
                "chromatogram maximum {:?} at t = {:?} min",
                max_signal, time[argmax]
            );

            let (mz, intensities) = generate_mass_spectrum();
            for (m, i) in mz.iter().zip(intensities.iter()) {
                println!("m/z {:?}: {:?}", m, i);
            }
        }
        _ => {
            println!("Wrong task number");
        }
    }
}
