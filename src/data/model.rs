use std::fmt;

use crate::error::MissingFieldError;

// ---------------------------------------------------------------------------
// Field – a named column of the dataset
// ---------------------------------------------------------------------------

/// The columns the charts know how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Location,
    Time,
    PopMlns,
    FertilityRate,
    LifeExpectancy,
}

impl Field {
    /// Every column the loader requires in the header row.
    pub const ALL: [Field; 5] = [
        Field::Location,
        Field::Time,
        Field::PopMlns,
        Field::FertilityRate,
        Field::LifeExpectancy,
    ];

    /// Column name as it appears in the header row.
    pub fn column_name(self) -> &'static str {
        match self {
            Field::Location => "location",
            Field::Time => "time",
            Field::PopMlns => "pop_mlns",
            Field::FertilityRate => "fertility_rate",
            Field::LifeExpectancy => "life_expectancy",
        }
    }

    /// Whether values of this field are calendar years.
    pub fn is_year(self) -> bool {
        matches!(self, Field::Time)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

// ---------------------------------------------------------------------------
// Record – one country-year observation
// ---------------------------------------------------------------------------

/// One row of the dataset. Numeric cells that could not be read hold NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub location: String,
    pub time: f64,
    pub pop_mlns: f64,
    pub fertility_rate: f64,
    pub life_expectancy: f64,
}

impl Record {
    /// Numeric value of `field`; the location column has no numeric reading.
    pub fn value(&self, field: Field) -> f64 {
        match field {
            Field::Location => f64::NAN,
            Field::Time => self.time,
            Field::PopMlns => self.pop_mlns,
            Field::FertilityRate => self.fertility_rate,
            Field::LifeExpectancy => self.life_expectancy,
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded file
// ---------------------------------------------------------------------------

/// All rows in file order, plus the cells that had to be coerced.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
    pub issues: Vec<MissingFieldError>,
}

impl Dataset {
    #[cfg(test)]
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            records,
            issues: Vec::new(),
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn record(location: &str, time: f64, pop_mlns: f64) -> Record {
    Record {
        location: location.to_string(),
        time,
        pop_mlns,
        fertility_rate: 2.0,
        life_expectancy: 70.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_reads_each_numeric_field() {
        let r = Record {
            location: "A".into(),
            time: 2000.0,
            pop_mlns: 10.5,
            fertility_rate: 1.8,
            life_expectancy: 79.1,
        };
        assert_eq!(r.value(Field::Time), 2000.0);
        assert_eq!(r.value(Field::PopMlns), 10.5);
        assert_eq!(r.value(Field::FertilityRate), 1.8);
        assert_eq!(r.value(Field::LifeExpectancy), 79.1);
        assert!(r.value(Field::Location).is_nan());
    }

    #[test]
    fn only_time_is_a_year() {
        let years: Vec<_> = Field::ALL.iter().filter(|f| f.is_year()).collect();
        assert_eq!(years, vec![&Field::Time]);
    }
}
