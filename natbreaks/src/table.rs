//! Per-entity values by period, parsed and validated once at load time.
//!
//! CSV layout: the header is `<label>,<entity>,<period>,<period>,...`; every
//! following line carries one entity. Column 0 is ignored.

use crate::error::TableError;
use crate::limits;
use std::collections::{HashMap, HashSet};

#[derive(Clone, Debug, PartialEq)]
pub struct EntityRow {
    pub entity: String,
    /// Aligned with [`PriceTable::periods`]; `None` is missing data.
    pub values: Vec<Option<f64>>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriceTable {
    periods: Vec<String>,
    rows: Vec<EntityRow>,
    index: HashMap<String, usize>,
}

impl PriceTable {
    /// Builds a table from already-typed rows, checking labels and shape.
    pub fn from_rows(periods: Vec<String>, rows: Vec<EntityRow>) -> Result<PriceTable, TableError> {
        check_periods(&periods)?;
        if rows.len() > limits::MAX_TABLE_ROWS {
            return Err(TableError::TooManyRows { max: limits::MAX_TABLE_ROWS });
        }
        let mut t = PriceTable { periods, rows: Vec::with_capacity(rows.len()), index: HashMap::new() };
        for (i, mut row) in rows.into_iter().enumerate() {
            if !limits::in_label_bounds(&row.entity) {
                return Err(TableError::EmptyEntity { line: i + 1 });
            }
            if row.values.len() != t.periods.len() {
                return Err(TableError::RowShape {
                    entity: row.entity,
                    got: row.values.len(),
                    expected: t.periods.len(),
                });
            }
            for v in row.values.iter_mut() {
                *v = v.filter(|x| x.is_finite());
            }
            t.push_row(row)?;
        }
        Ok(t)
    }

    pub fn parse_csv(text: &str) -> Result<PriceTable, TableError> {
        if text.len() > limits::MAX_CSV_BYTES {
            return Err(TableError::TooLarge { max: limits::MAX_CSV_BYTES });
        }
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l))
            .filter(|(_, l)| !l.trim().is_empty());

        let (hline, header) = lines.next().ok_or(TableError::MissingHeader)?;
        let header = split_cells(header).ok_or(TableError::UnterminatedQuote { line: hline })?;
        if header.len() > limits::MAX_TABLE_COLUMNS {
            return Err(TableError::TooManyColumns { max: limits::MAX_TABLE_COLUMNS });
        }
        let periods: Vec<String> = header.into_iter().skip(2).collect();
        check_periods(&periods)?;

        let mut t = PriceTable { periods, rows: Vec::new(), index: HashMap::new() };
        for (line, raw) in lines {
            if t.rows.len() >= limits::MAX_TABLE_ROWS {
                return Err(TableError::TooManyRows { max: limits::MAX_TABLE_ROWS });
            }
            let cells = split_cells(raw).ok_or(TableError::UnterminatedQuote { line })?;
            let entity = match cells.get(1) {
                Some(e) if limits::in_label_bounds(e) => e.clone(),
                _ => return Err(TableError::EmptyEntity { line }),
            };
            let values = (0..t.periods.len())
                .map(|j| cells.get(j + 2).and_then(|c| parse_value(c)))
                .collect();
            t.push_row(EntityRow { entity, values })?;
        }
        Ok(t)
    }

    fn push_row(&mut self, row: EntityRow) -> Result<(), TableError> {
        if self.index.contains_key(&row.entity) {
            return Err(TableError::DuplicateEntity { entity: row.entity });
        }
        self.index.insert(row.entity.clone(), self.rows.len());
        self.rows.push(row);
        Ok(())
    }

    pub fn periods(&self) -> &[String] { &self.periods }
    pub fn rows(&self) -> &[EntityRow] { &self.rows }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn entities(&self) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().map(|r| r.entity.as_str())
    }

    pub fn period_index(&self, period: &str) -> Option<usize> {
        self.periods.iter().position(|p| p == period)
    }

    pub fn row(&self, entity: &str) -> Option<&EntityRow> {
        self.index.get(entity).map(|&i| &self.rows[i])
    }

    pub fn value(&self, entity: &str, period: &str) -> Option<f64> {
        let j = self.period_index(period)?;
        self.row(entity)?.values.get(j).copied().flatten()
    }

    /// Finite values present for `period`, in row order.
    pub fn values_for(&self, period: &str) -> Vec<f64> {
        match self.period_index(period) {
            Some(j) => self.rows.iter().filter_map(|r| r.values[j]).collect(),
            None => Vec::new(),
        }
    }
}

fn check_periods(periods: &[String]) -> Result<(), TableError> {
    if periods.is_empty() {
        return Err(TableError::NoPeriods);
    }
    if periods.len() + 2 > limits::MAX_TABLE_COLUMNS {
        return Err(TableError::TooManyColumns { max: limits::MAX_TABLE_COLUMNS });
    }
    let mut seen = HashSet::new();
    for (i, p) in periods.iter().enumerate() {
        if !limits::in_label_bounds(p) {
            return Err(TableError::EmptyPeriod { column: i + 2 });
        }
        if !seen.insert(p.as_str()) {
            return Err(TableError::DuplicatePeriod { period: p.clone() });
        }
    }
    Ok(())
}

/// Accepts plain and grouped numbers with an optional leading `$`.
fn parse_value(cell: &str) -> Option<f64> {
    let s = cell.trim();
    let s = s.strip_prefix('$').unwrap_or(s);
    if s.is_empty() {
        return None;
    }
    let v: f64 = if s.contains(',') {
        s.replace(',', "").parse().ok()?
    } else {
        s.parse().ok()?
    };
    v.is_finite().then_some(v)
}

/// Splits one CSV line; `None` on an unterminated quote.
fn split_cells(line: &str) -> Option<Vec<String>> {
    let mut cells = Vec::new();
    let mut cur = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    cur.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if cur.trim().is_empty() => {
                cur.clear();
                in_quotes = true;
            }
            ',' if !in_quotes => cells.push(std::mem::take(&mut cur).trim().to_string()),
            _ => cur.push(c),
        }
    }
    if in_quotes {
        return None;
    }
    cells.push(cur.trim().to_string());
    Some(cells)
}
