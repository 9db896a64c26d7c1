//! Precise product (IGS long name) file naming
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{
    error::Error,
    prelude::{Epoch, Unit},
};

/// Calendar day, expressed as YYYYDOY (year and day of year), like
/// precise products are named.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearDoy {
    /// Year
    pub year: u32,
    /// Day of year, starting at 1
    pub doy: u32,
}

impl YearDoy {
    /// Builds [YearDoy] from YYYYDOY integer representation.
    pub fn from_yyyydoy(value: u32) -> Result<Self, Error> {
        let (year, doy) = (value / 1000, value % 1000);
        let s = Self { year, doy };
        if !(1900..=9999).contains(&year)
            || doy == 0
            || Self::from_tai_midnight(s.tai_midnight()) != s
        {
            return Err(Error::InvalidYearDoy(value));
        }
        Ok(s)
    }

    /// Returns YYYYDOY integer representation.
    pub fn yyyydoy(&self) -> u32 {
        self.year * 1000 + self.doy
    }

    /// [YearDoy] of this UTC [Epoch].
    pub fn from_epoch(epoch: Epoch) -> Self {
        let (year, month, day, _, _, _, _) = epoch.to_gregorian_utc();
        Self::from_tai_midnight(Epoch::from_gregorian_tai_at_midnight(year, month, day))
    }

    /// Midnight UTC starting this day.
    pub fn epoch(&self) -> Epoch {
        let (year, month, day, _, _, _, _) = self.tai_midnight().to_gregorian_tai();
        Epoch::from_gregorian_utc_at_midnight(year, month, day)
    }

    /// Returns the following day.
    pub fn next(&self) -> Self {
        Self::from_tai_midnight(self.tai_midnight() + 1.0 * Unit::Day)
    }

    // Day arithmetics are carried out in TAI, which has no leap second.
    fn tai_midnight(&self) -> Epoch {
        Epoch::from_gregorian_tai_at_midnight(self.year as i32, 1, 1)
            + (self.doy as f64 - 1.0) * Unit::Day
    }

    fn from_tai_midnight(epoch: Epoch) -> Self {
        let (year, _, _, _, _, _, _) = epoch.to_gregorian_tai();
        let new_year = Epoch::from_gregorian_tai_at_midnight(year, 1, 1);
        let days = (epoch - new_year).to_unit(Unit::Day).floor();
        Self {
            year: year.max(0) as u32,
            doy: days as u32 + 1,
        }
    }
}

impl Display for YearDoy {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{:04}{:03}", self.year, self.doy)
    }
}

/// Daily final product file name, for instance
/// `IGS0OPSFIN_20240010000_01D_15M_ORB.SP3`.
pub fn product_file_name(header: &str, date: YearDoy, period: &str, kind: &str) -> String {
    format!("{}{}0000_01D_{}_{}", header, date, period, kind)
}

/// Daily final orbit (SP3) product file name.
pub fn sp3_file_name(header: &str, date: YearDoy, period: &str) -> String {
    product_file_name(header, date, period, "ORB.SP3")
}

/// Iterates each day from `start` to `end` (both included).
pub fn daily_range(start: YearDoy, end: YearDoy) -> Result<Vec<YearDoy>, Error> {
    if start > end {
        return Err(Error::StartDateAfterEndDate {
            start: start.yyyydoy(),
            end: end.yyyydoy(),
        });
    }
    let mut days = vec![start];
    let mut day = start;
    while day < end {
        day = day.next();
        days.push(day);
    }
    Ok(days)
}
