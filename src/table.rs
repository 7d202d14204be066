use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use log::{debug, info};
use serde::Deserialize;

use crate::{Error, Result};

/// A column of the input, by header name or 0-based index.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Column {
    Index(usize),
    Name(String),
}

impl From<&str> for Column {
    fn from(name: &str) -> Self { Column::Name(name.to_string()) }
}

impl From<usize> for Column {
    fn from(i: usize) -> Self { Column::Index(i) }
}

/// Layout of a value table file.
#[derive(Clone, Debug, PartialEq)]
pub struct TableSpec {
    pub position: Column,
    pub target: Column,
    /// Column holding an identity label (e.g. the residue name).
    pub identity: Option<Column>,
    pub delimiter: u8,
    /// Whether the first line names the columns.
    pub header: bool,
}

impl Default for TableSpec {
    fn default() -> Self {
        TableSpec { position: "position".into(), target: "value".into(),
                    identity: None, delimiter: b'\t', header: true }
    }
}

/// Values (and optional identity labels) keyed by position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValueTable {
    values: BTreeMap<i64, f64>,
    identities: Option<BTreeMap<i64, String>>,
}

/// Spelling of a missing value; read as `0.`.
const NA: &str = "NA";

fn parse_value(s: &str) -> Option<f64> {
    if s == NA { return Some(0.) }
    s.parse::<f64>().ok().filter(|x| x.is_finite())
}

impl ValueTable {
    /// Build a table from `(position, value)` pairs.  Values must be
    /// finite.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (i64, f64)>)
                      -> Result<Self> {
        let mut values = BTreeMap::new();
        for (pos, x) in pairs {
            if pos < 1 {
                return Err(Error::InputFormat(format!(
                    "position {pos} is not positive")))
            }
            if !x.is_finite() {
                return Err(Error::InputFormat(format!(
                    "value {x} at position {pos} is not a number")))
            }
            if values.insert(pos, x).is_some() {
                return Err(Error::InputFormat(format!(
                    "duplicate position {pos}")))
            }
        }
        Ok(ValueTable { values, identities: None })
    }

    /// Attach identity labels.  Positions without a label are allowed.
    pub fn with_identities(
        mut self, ids: impl IntoIterator<Item = (i64, String)>) -> Self {
        self.identities = Some(ids.into_iter().collect());
        self
    }

    pub fn from_path(path: impl AsRef<Path>, spec: &TableSpec)
                     -> Result<Self> {
        let path = path.as_ref();
        let table = Self::from_reader(File::open(path)?, spec)?;
        info!("{}: {} positions", path.display(), table.len());
        Ok(table)
    }

    /// Read a delimited table.  Fields are trimmed, `NA` values are
    /// read as `0.`.
    pub fn from_reader<R: Read>(rdr: R, spec: &TableSpec) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(spec.delimiter)
            .has_headers(spec.header)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(rdr);
        let names = if spec.header { Some(rdr.headers()?.clone()) }
                    else { None };
        let index = |c: &Column| -> Result<usize> {
            match (c, &names) {
                (Column::Index(i), _) => Ok(*i),
                (Column::Name(n), Some(h)) => h.iter().position(|x| x == n)
                    .ok_or_else(|| Error::InputFormat(format!(
                        "no column {n:?} in header"))),
                (Column::Name(n), None) => Err(Error::config(format!(
                    "column {n:?} given by name but the table has no \
                     header"))),
            }
        };
        let pos_col = index(&spec.position)?;
        let val_col = index(&spec.target)?;
        let id_col = spec.identity.as_ref().map(index).transpose()?;
        debug!("columns: position {pos_col}, target {val_col}, \
                identity {id_col:?}");

        let mut values = BTreeMap::new();
        let mut identities = id_col.map(|_| BTreeMap::new());
        for record in rdr.records() {
            let record = record?;
            let line = record.position().map_or(0, |p| p.line());
            let bad = |message: String| Error::MalformedRow { line, message };
            if record.iter().all(str::is_empty) { continue }
            let field = |i: usize| record.get(i).ok_or_else(|| bad(format!(
                "expected at least {} fields, found {}", i + 1, record.len())));
            let pos_str = field(pos_col)?;
            let pos: i64 = pos_str.parse().map_err(|_| bad(format!(
                "position {pos_str:?} is not an integer")))?;
            if pos < 1 {
                return Err(bad(format!("position {pos} is not positive")))
            }
            let val_str = field(val_col)?;
            let x = parse_value(val_str).ok_or_else(|| bad(format!(
                "value {val_str:?} is not a number")))?;
            if values.insert(pos, x).is_some() {
                return Err(bad(format!("duplicate position {pos}")))
            }
            if let (Some(ids), Some(i)) = (identities.as_mut(), id_col) {
                ids.insert(pos, field(i)?.to_string());
            }
        }
        if values.is_empty() {
            return Err(Error::InputFormat("the table has no rows".into()))
        }
        Ok(ValueTable { values, identities })
    }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    pub fn get(&self, pos: i64) -> Option<f64> {
        self.values.get(&pos).copied()
    }

    pub fn identity(&self, pos: i64) -> Option<&str> {
        self.identities.as_ref()?.get(&pos).map(String::as_str)
    }

    pub fn has_identities(&self) -> bool { self.identities.is_some() }

    /// `(position, value)` in increasing position order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.values.iter().map(|(&p, &x)| (p, x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TSV: &str = "position\treference\tscore\n\
                       3\tK\t0.5\n\
                       1\tM\tNA\n\
                       2\tA\t-1.25\n";

    fn spec() -> TableSpec {
        TableSpec { target: "score".into(),
                    identity: Some("reference".into()),
                    ..TableSpec::default() }
    }

    #[test]
    fn read_tsv() {
        let t = ValueTable::from_reader(TSV.as_bytes(), &spec()).unwrap();
        assert_eq!(t.iter().collect::<Vec<_>>(),
                   vec![(1, 0.), (2, -1.25), (3, 0.5)]);
        assert_eq!(t.identity(1), Some("M"));
        assert_eq!(t.identity(3), Some("K"));
        assert_eq!(t.identity(4), None);
    }

    #[test]
    fn without_identities() {
        let spec = TableSpec { identity: None, ..spec() };
        let t = ValueTable::from_reader(TSV.as_bytes(), &spec).unwrap();
        assert!(!t.has_identities());
        assert_eq!(t.get(2), Some(-1.25));
    }

    #[test]
    fn by_index_without_header() {
        let spec = TableSpec { position: 0.into(), target: 2.into(),
                               identity: None, delimiter: b',',
                               header: false };
        let t = ValueTable::from_reader(" 5 ,x, 2e3\n6,y,7\n".as_bytes(),
                                        &spec).unwrap();
        assert_eq!(t.iter().collect::<Vec<_>>(), vec![(5, 2000.), (6, 7.)]);
    }

    #[test]
    fn names_need_a_header() {
        let spec = TableSpec { header: false, ..TableSpec::default() };
        let e = ValueTable::from_reader("1\t2\n".as_bytes(), &spec)
            .unwrap_err();
        assert!(matches!(e, Error::Configuration(_)));
    }

    #[test]
    fn missing_column() {
        let spec = TableSpec { target: "function.delta.med".into(),
                               ..spec() };
        let e = ValueTable::from_reader(TSV.as_bytes(), &spec).unwrap_err();
        assert!(matches!(e, Error::InputFormat(_)), "{e}");
    }

    #[test]
    fn malformed_rows() {
        for (body, what) in [("1\tM\tabc\n", "not a number"),
                             ("1\tM\tinf\n", "not a number"),
                             ("x\tM\t1\n", "not an integer"),
                             ("1\tM\n", "fields"),
                             ("0\tM\t1\n", "not positive"),
                             ("1\tM\t1\n1\tA\t2\n", "duplicate")] {
            let input = format!("position\treference\tscore\n{body}");
            let e = ValueTable::from_reader(input.as_bytes(), &spec())
                .unwrap_err();
            assert!(e.is_input_format(), "{e}");
            assert!(e.to_string().contains(what), "{e}");
            assert!(e.to_string().contains("line 2")
                    || e.to_string().contains("line 3"), "{e}");
        }
    }

    #[test]
    fn blank_lines_are_skipped() {
        let input = "position\tvalue\n1\t2\n\n2\t3\n";
        let t = ValueTable::from_reader(input.as_bytes(),
                                        &TableSpec::default()).unwrap();
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn empty_table() {
        let e = ValueTable::from_reader("position\tvalue\n".as_bytes(),
                                        &TableSpec::default()).unwrap_err();
        assert!(matches!(e, Error::InputFormat(_)));
    }

    #[test]
    fn pairs() {
        assert!(ValueTable::from_pairs([(1, 1.), (1, 2.)]).is_err());
        assert!(ValueTable::from_pairs([(-1, 1.)]).is_err());
        for x in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let e = ValueTable::from_pairs([(1, 0.), (2, x)]).unwrap_err();
            assert!(e.is_input_format(), "{e}");
        }
        let t = ValueTable::from_pairs([(2, 1.), (1, 2.)]).unwrap()
            .with_identities([(1, "G".to_string())]);
        assert_eq!(t.iter().next(), Some((1, 2.)));
        assert_eq!(t.identity(1), Some("G"));
    }
}
