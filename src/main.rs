use std::io;
use std::process::ExitCode;

use knn::{
    error::Error,
    nearest_neighbors::{Classifier, KNearestNeighbors},
    parse::TokenReader,
};

fn run() -> Result<(), Error> {
    let stdin = io::stdin();
    let mut reader = TokenReader::new(stdin.lock());

    let header = reader.read_header()?;
    let samples = reader.read_training_set(&header)?;
    let model = KNearestNeighbors::new(samples)?;

    while let Some(query) = reader.read_query_vector(header.dimensions)? {
        let label = model.classify(&query, header.neighbor_count);
        println!("{label}");
    }

    Ok(())
}

fn main() -> ExitCode {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
