//! Plain text tables of the reduced traverse

use std::fmt;

use crate::{
    angle::dms::Dms,
    reduce::closure::AngleClosure,
    station::Station,
    traverse::{Mode, Reduction},
};

const WIDE_RULE: &str = "==================================================================================================================";

/// Angle with an explicit sign: `+0°02′24.00″`
pub fn signed_dms(decimal_degrees: f64) -> String {
    let sign = if decimal_degrees < 0.0 { '-' } else { '+' };
    format!("{}{}", sign, Dms::from_decimal_degrees(decimal_degrees.abs()))
}

fn dms(decimal_degrees: f64) -> String {
    Dms::from_decimal_degrees(decimal_degrees).to_string()
}

fn title(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{}", WIDE_RULE)?;
    writeln!(f, "{:^width$}", name, width = WIDE_RULE.len())?;
    writeln!(f, "{}", WIDE_RULE)
}

/// The full report of a reduced traverse, ready to be printed
#[derive(Debug, Copy, Clone)]
pub struct Report<'a> {
    reduction: &'a Reduction,
}

impl<'a> Report<'a> {
    /// Report on the reduction
    pub fn new(reduction: &'a Reduction) -> Self {
        Self { reduction }
    }

    fn angle_summary(closure: &AngleClosure, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== ANGLE CORRECTION SUMMARY ===")?;
        writeln!(f, "Number of stations (n):      {}", closure.stations())?;
        writeln!(f, "Theoretical sum (2n-4)*90:   {}", dms(closure.theoretical_sum))?;
        writeln!(f, "Observed sum of angles:      {}", dms(closure.observed_sum))?;
        writeln!(f, "Angular error:               {}", signed_dms(closure.angular_error))?;
        writeln!(f, "Correction per station:      {}", signed_dms(closure.correction))
    }

    fn traverse_table(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        title(f, "TRAVERSE CALCULATIONS TABLE")?;
        let interior = self.reduction.mode == Mode::InteriorAngles;
        if interior {
            writeln!(
                f,
                "{:<9} | {:>14} | {:>14} | {:>14} | {:>14} | {:<4} | {:>9} | {:>10} | {:>10} | {:>10} | {:>10}",
                "Station", "Interior", "Correction", "Corrected", "WCB", "Quad", "Length",
                "Northing", "Southing", "Easting", "Westing"
            )?;
        } else {
            writeln!(
                f,
                "{:<9} | {:>16} | {:>14} | {:<4} | {:>9} | {:>10} | {:>10} | {:>10} | {:>10}",
                "Station", "Given", "WCB", "Quad", "Length", "Northing", "Southing", "Easting", "Westing"
            )?;
        }

        for station in &self.reduction.stations {
            write!(f, "{:<9} | ", station.name)?;
            if let Some(angle) = station.interior_angle {
                write!(
                    f,
                    "{:>14} | {:>14} | {:>14} | ",
                    dms(angle.observed),
                    signed_dms(angle.correction),
                    dms(angle.corrected)
                )?;
            } else {
                let given = if self.reduction.mode == Mode::Quadrantal {
                    format!("{:#}", station.fore_bearing)
                } else {
                    station.fore_bearing.to_string()
                };
                write!(f, "{:>16} | ", given)?;
            }

            let bearing = station.corrected_bearing;
            let line = station.consecutive;
            writeln!(
                f,
                "{:>14} | {:<4} | {:>9.3} | {:>10.3} | {:>10.3} | {:>10.3} | {:>10.3}",
                bearing.to_string(),
                bearing.quadrant().to_string(),
                station.line_length,
                line.northing,
                line.southing,
                line.easting,
                line.westing
            )?;
        }
        Ok(())
    }

    fn corrections_table(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        title(f, "CORRECTIONS TABLE")?;
        writeln!(
            f,
            "{:<9} | {:>10} | {:>10} | {:>10} | {:>10}",
            "Station", "Northing", "Southing", "Easting", "Westing"
        )?;
        for station in &self.reduction.stations {
            let correction = station.consecutive_correction();
            writeln!(
                f,
                "{:<9} | {:>10.3} | {:>10.3} | {:>10.3} | {:>10.3}",
                station.name,
                correction.northing,
                correction.southing,
                correction.easting,
                correction.westing
            )?;
        }
        Ok(())
    }

    fn coordinates_table(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        title(f, "CORRECTED CONSECUTIVE COORDINATES & INDEPENDENT COORDINATES")?;
        writeln!(
            f,
            "{:<9} | {:>10} | {:>10} | {:>10} | {:>10} | {:>12} | {:>12}",
            "Station", "Northing", "Southing", "Easting", "Westing", "Northing", "Easting"
        )?;
        for Station {
            name,
            corrected,
            independent,
            ..
        } in &self.reduction.stations
        {
            writeln!(
                f,
                "{:<9} | {:>10.3} | {:>10.3} | {:>10.3} | {:>10.3} | {:>12.3} | {:>12.3}",
                name,
                corrected.northing,
                corrected.southing,
                corrected.easting,
                corrected.westing,
                independent.northing,
                independent.easting
            )?;
        }
        Ok(())
    }

    fn error_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let misclosure = &self.reduction.misclosure;
        writeln!(f)?;
        writeln!(f, "=== ERROR SUMMARY ===")?;
        writeln!(f, "Sum of latitude (ΣL):    {:14.6} m", misclosure.sum_lat)?;
        writeln!(f, "Sum of departure (ΣD):   {:14.6} m", misclosure.sum_dep)?;
        writeln!(f, "Linear error:            {:14.6} m", misclosure.linear_error())?;
        writeln!(f, "Error direction:         {}", misclosure.error_direction())?;
        writeln!(f, "Total traverse length:   {:14.3} m", misclosure.total_length)?;
        match misclosure.accuracy_ratio() {
            Some(ratio) => writeln!(f, "Accuracy ratio:          1:{:.0}", ratio),
            None => writeln!(f, "Accuracy ratio:          closed (no linear error)"),
        }
    }

    fn ring_closure(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let offset = self.reduction.closing_offset();
        writeln!(f)?;
        writeln!(f, "=== CLOSURE AFTER ADJUSTMENT ===")?;
        writeln!(f, "Sum of corrected latitude:  {:14.6} m", offset.northing)?;
        writeln!(f, "Sum of corrected departure: {:14.6} m", offset.easting)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Traverse of {} stations by {}", self.reduction.stations.len(), self.reduction.mode)?;
        if let Some(closure) = &self.reduction.angle_closure {
            writeln!(f)?;
            Self::angle_summary(closure, f)?;
        }
        self.traverse_table(f)?;
        self.corrections_table(f)?;
        self.coordinates_table(f)?;
        self.error_summary(f)?;
        self.ring_closure(f)
    }
}
