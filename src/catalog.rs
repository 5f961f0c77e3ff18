//! Catalog records and delimited-text ingestion.
//!
//! The engine itself only ever sees an in-memory, read-only slice of
//! [`CelestialObject`] records. Malformed input (wrong column count,
//! non-numeric fields) is rejected here, before any worker is spawned.

use std::io::BufRead;

use crate::error::Error;

/// A single catalog entry.
///
/// Coordinates are equatorial and expressed in degrees. Records are never
/// mutated after the catalog is loaded; workers hold a shared read-only view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialObject {
    /// stable catalog identifier
    pub id: u32,
    /// right ascension, in degrees
    pub right_ascension: f64,
    /// declination, in degrees
    pub declination: f64,
}

/// An ordered, immutable sequence of [`CelestialObject`] records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    objects: Vec<CelestialObject>,
}

impl Catalog {
    /// wrap an already-parsed record list
    pub fn new(objects: Vec<CelestialObject>) -> Self {
        Catalog { objects }
    }

    /// Parse a whitespace-delimited catalog.
    ///
    /// Each non-blank line holds exactly 3 columns: an integer identifier,
    /// right ascension in degrees, and declination in degrees. The numeric
    /// values are **not** range-checked: a NaN or infinite coordinate will
    /// propagate into the statistics (see [`crate::Engine::run`]).
    pub fn from_reader(reader: impl BufRead) -> Result<Catalog, Error> {
        let mut objects = Vec::new();
        for (line_idx, line) in reader.lines().enumerate() {
            let line_no = line_idx + 1;
            let line = line.map_err(|e| Error::catalog_parse(line_no, e.to_string()))?;
            let mut fields = line.split_whitespace();

            let Some(id_field) = fields.next() else {
                continue; // blank line
            };
            let (Some(ra_field), Some(dec_field)) = (fields.next(), fields.next()) else {
                return Err(Error::catalog_parse(
                    line_no,
                    String::from("expected 3 columns (id, ra, dec)"),
                ));
            };
            if fields.next().is_some() {
                return Err(Error::catalog_parse(
                    line_no,
                    String::from("line has more than 3 columns"),
                ));
            }

            let id: u32 = id_field
                .parse()
                .map_err(|_| Error::catalog_parse(line_no, format!("bad id field {id_field:?}")))?;
            let right_ascension: f64 = ra_field.parse().map_err(|_| {
                Error::catalog_parse(line_no, format!("bad right-ascension field {ra_field:?}"))
            })?;
            let declination: f64 = dec_field.parse().map_err(|_| {
                Error::catalog_parse(line_no, format!("bad declination field {dec_field:?}"))
            })?;

            objects.push(CelestialObject {
                id,
                right_ascension,
                declination,
            });
        }
        Ok(Catalog { objects })
    }

    /// the number of records
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// read-only view of the records (this is what the engine consumes)
    pub fn objects(&self) -> &[CelestialObject] {
        &self.objects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple() {
        let text = "0 24.43 -17.2\n1 180.0 89.5\n\n2 300.25 0.0\n";
        let catalog = Catalog::from_reader(text.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.objects()[1],
            CelestialObject {
                id: 1,
                right_ascension: 180.0,
                declination: 89.5
            }
        );
    }

    #[test]
    fn parse_tab_delimited() {
        let text = "7\t0.5\t-0.5\n";
        let catalog = Catalog::from_reader(text.as_bytes()).unwrap();
        assert_eq!(catalog.objects()[0].id, 7);
    }

    #[test]
    fn reject_extra_column() {
        let text = "0 1.0 2.0 3.0\n";
        let err = Catalog::from_reader(text.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn reject_missing_column() {
        let text = "0 1.0 2.0\n1 3.0\n";
        let err = Catalog::from_reader(text.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn reject_non_numeric_field() {
        let text = "0 not-a-number 2.0\n";
        assert!(Catalog::from_reader(text.as_bytes()).is_err());
    }

    #[test]
    fn empty_input() {
        let catalog = Catalog::from_reader("".as_bytes()).unwrap();
        assert!(catalog.is_empty());
    }
}
