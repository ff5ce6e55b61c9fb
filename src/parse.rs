use std::collections::VecDeque;
use std::io::BufRead;

use nalgebra::DVector;

use crate::error::Error;

#[derive(Debug, Clone, Copy)]
pub struct Header {
    pub neighbor_count: usize,
    pub training_set_size: usize,
    pub dimensions: usize,
}

#[derive(Debug, Clone)]
pub struct Sample {
    pub label: f64,
    pub features: DVector<f64>,
}

/// Whitespace-separated token reader over a text stream.
///
/// The stream grammar is: a header (`k trainingSetSize size`), then
/// `trainingSetSize` labeled training vectors, then unlabeled query
/// vectors until the stream runs out.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<Option<String>, Error> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    fn next_value(&mut self) -> Result<Option<f64>, Error> {
        match self.next_token()? {
            None => Ok(None),
            Some(token) => match token.parse() {
                Ok(value) => Ok(Some(value)),
                Err(_) => Err(Error::MalformedToken { token }),
            },
        }
    }

    fn require_value(&mut self, expected: &'static str) -> Result<f64, Error> {
        self.next_value()?
            .ok_or(Error::UnexpectedEndOfInput { expected })
    }

    fn require_count(&mut self, expected: &'static str) -> Result<usize, Error> {
        match self.next_token()? {
            None => Err(Error::UnexpectedEndOfInput { expected }),
            Some(token) => token.parse().map_err(|_| Error::MalformedToken { token }),
        }
    }

    pub fn read_header(&mut self) -> Result<Header, Error> {
        let neighbor_count = self.require_count("neighbor count")?;
        let training_set_size = self.require_count("training set size")?;
        let dimensions = self.require_count("vector dimensionality")?;

        if neighbor_count == 0 {
            return Err(Error::InvalidParameter {
                reason: "neighbor count must be positive".to_owned(),
            });
        }

        if dimensions == 0 {
            return Err(Error::InvalidParameter {
                reason: "vector dimensionality must be positive".to_owned(),
            });
        }

        Ok(Header {
            neighbor_count,
            training_set_size,
            dimensions,
        })
    }

    pub fn read_training_set(&mut self, header: &Header) -> Result<Vec<Sample>, Error> {
        let mut samples = Vec::with_capacity(header.training_set_size);

        for _ in 0..header.training_set_size {
            let label = self.require_value("training label")?;

            let mut features = Vec::with_capacity(header.dimensions);
            for _ in 0..header.dimensions {
                features.push(self.require_value("training feature value")?);
            }

            samples.push(Sample {
                label,
                features: DVector::from_vec(features),
            });
        }

        Ok(samples)
    }

    /// Reads the next query vector. Returns `None` once the stream runs
    /// out, including when it ends mid-vector: a partial trailing vector
    /// is discarded without producing a result.
    pub fn read_query_vector(&mut self, dimensions: usize) -> Result<Option<DVector<f64>>, Error> {
        let mut features = Vec::with_capacity(dimensions);

        for _ in 0..dimensions {
            match self.next_value()? {
                Some(value) => features.push(value),
                None => return Ok(None),
            }
        }

        Ok(Some(DVector::from_vec(features)))
    }
}
