//! Runs a reference file through a single stream filter.
//!
//! Usage: `apply_reference <file.bin|file.txt>`
//!
//! Prints MATLAB vectors for inspection, checks the stored outputs when the
//! file holds some, and writes `<stem>_S_applied_<width>.bin` with the
//! computed outputs.
extern crate iir_rs;

use iir_rs::prelude::*;
use iir_rs::reference::binary::{binary_file_name, read_binary, write_binary};
use iir_rs::reference::text::{dump_matlab_vector, read_text};
use iir_rs::reference::ReferenceData;
use std::env;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::process;

fn load(path: &Path) -> ReferenceData<Signal> {
    let file = File::open(path).unwrap();
    let mut reader = BufReader::new(file);
    let data = match path.extension().and_then(|e| e.to_str()) {
        Some("bin") => read_binary(&mut reader),
        _ => read_text(reader),
    };
    match data {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error loading the reference file: {}", e);
            process::exit(1);
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <reference file (.bin or .txt)>", args[0]);
        process::exit(1);
    }
    let path = Path::new(&args[1]);
    let data = load(path);

    let outputs = data.run_single().unwrap();

    print!("{}", dump_matlab_vector("a_coefs", &data.a));
    print!("{}", dump_matlab_vector("b_coefs", &data.b));
    print!("{}", dump_matlab_vector("inputs", &data.inputs));
    print!("{}", dump_matlab_vector("my_outputs", &outputs));
    println!(
        "ml_out = filter(b_coefs, a_coefs, inputs); \
         hold off; plot(inputs); hold on; plot(ml_out,'r'); plot(my_outputs,'g')"
    );

    if data.outputs.is_some() {
        match data.check(&outputs) {
            Ok(()) => println!("\nOutputs match the reference"),
            Err(e) => {
                eprintln!("\n{}", e);
                process::exit(1);
            }
        }
    }

    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("reference");
    let out_name = binary_file_name::<Signal>(&format!("{}_S_applied", stem));
    let out_path = path.with_file_name(&out_name);
    let mut writer = BufWriter::new(File::create(&out_path).unwrap());
    write_binary(&mut writer, &data, &outputs).unwrap();

    println!("\nBinary reference file '{}' generated", out_path.display());
    println!("Using sample type {}", <Signal as Sample>::TYPE_NAME);
}
