//! MPC Orbit Database record parsing
//!
//! Fixed-column readers for the Minor Planet Center's orbit exports: the
//! MPCORB format for minor planets and the CometEls format for comets.
//! Epochs and packed designations use the MPC's base-62 convention, where
//! `A`-`Z` continue past `9` and `a`-`z` past `Z`.
//!
//! Formats: <https://www.minorplanetcenter.net/iau/info/MPOrbitFormat.html>
//! and <https://www.minorplanetcenter.net/iau/info/CometOrbitFormat.html>.

use log::debug;

use super::{BodyClass, MinorBodyRecord};
use crate::constants::{reduce_angle, DEG_TO_RAD, GAUSS_GRAV_CONSTANT, TWO_PI};
use crate::kepler::{elements_to_ephemeris, OrbitalElements};
use crate::time::JulianDate;
use crate::{OrreryError, Result};

/// Decodes one character of the MPC's packed base-62 notation.
fn unpack(c: u8) -> i32 {
    match c {
        b'a'..=b'z' => i32::from(c) - 61,
        b'A'..=b'Z' => i32::from(c) - 55,
        _ => i32::from(c) - 48,
    }
}

fn field(line: &str, start: usize, len: usize) -> Result<&str> {
    line.get(start..start + len)
        .ok_or_else(|| OrreryError::InvalidData("record is not plain ASCII text".into()))
}

fn tail(line: &str, start: usize) -> Result<&str> {
    line.get(start..)
        .ok_or_else(|| OrreryError::InvalidData("record is not plain ASCII text".into()))
}

/// Reads a fixed-width numeric field; blank fields read as zero, matching
/// the catalog's convention for absent values.
fn num_field(line: &str, start: usize, len: usize) -> Result<f64> {
    let text = field(line, start, len)?.trim();
    if text.is_empty() {
        return Ok(0.0);
    }
    text.parse().map_err(|_| {
        debug!("malformed numeric field {:?} at column {}", text, start + 1);
        OrreryError::InvalidData(format!("malformed numeric field {:?}", text))
    })
}

fn int_field(line: &str, start: usize, len: usize) -> Result<i32> {
    let text = field(line, start, len)?.trim();
    text.parse().map_err(|_| {
        debug!("malformed integer field {:?} at column {}", text, start + 1);
        OrreryError::InvalidData(format!("malformed integer field {:?}", text))
    })
}

fn name_field(line: &str, start: usize) -> Result<Option<String>> {
    let text = tail(line, start)?.trim();
    Ok((!text.is_empty()).then(|| text.to_string()))
}

/// Unpacks a minor planet designation: permanent numbers keep their
/// digits, provisional designations expand to the `YYYY XXn` form, and
/// survey designations pass through unchanged.
fn minor_planet_id(line: &str) -> Result<String> {
    let bytes = line.as_bytes();
    if bytes[2] == b'S' {
        return Ok(field(line, 0, 7)?.trim_end().to_string());
    }

    let year = unpack(bytes[0]) * 100 + unpack(bytes[1]) * 10 + unpack(bytes[2]);
    if bytes[3].is_ascii_digit() {
        Ok(format!("{}{}", year, field(line, 3, 2)?))
    } else {
        let mut id = format!("{} {}{}", year, bytes[3] as char, bytes[6] as char);
        let cycle = unpack(bytes[4]) * 10 + unpack(bytes[5]);
        if cycle != 0 {
            id.push_str(&cycle.to_string());
        }
        Ok(id)
    }
}

/// Unpacks a comet designation: the permanent number when there is one,
/// otherwise the provisional `YYYY Xn` form with any fragment letter
/// appended as a suffix.
fn comet_id(line: &str) -> Result<String> {
    let bytes = line.as_bytes();
    if bytes[0].is_ascii_digit() {
        return Ok(int_field(line, 0, 4)?.to_string());
    }

    let year = unpack(bytes[5]) * 100 + unpack(bytes[6]) * 10 + unpack(bytes[7]);
    let mut id = format!("{} {}", year, bytes[8] as char);
    if bytes[11].is_ascii_uppercase() {
        id.push(bytes[11] as char);
    }
    let cycle = unpack(bytes[9]) * 10 + unpack(bytes[10]);
    if cycle != 0 {
        id.push_str(&cycle.to_string());
    }
    if bytes[11].is_ascii_lowercase() {
        id.push('-');
        id.push(bytes[11].to_ascii_uppercase() as char);
    }

    Ok(id)
}

/// Parses one line of the MPCORB minor planet export and computes the
/// body's heliocentric position at `tt`, in the equinox and ecliptic of
/// J2000.
///
/// The catalog lists the semi-major axis, so the perihelion distance is
/// derived from it and the eccentricity.
pub fn minor_planet_record(line: &str, tt: &JulianDate) -> Result<MinorBodyRecord> {
    if line.len() < 160 {
        debug!("minor planet record is {} characters, need 160", line.len());
        return Err(OrreryError::InvalidData(
            "minor planet record is too short".into(),
        ));
    }
    let bytes = line.as_bytes();

    let id = minor_planet_id(line)?;
    let name = if line.len() > 166 {
        name_field(line, 166)?
    } else {
        None
    };

    let absolute_magnitude = num_field(line, 8, 5)?;
    let slope_parameter = num_field(line, 14, 5)?;

    // The epoch of osculation is packed: base-62 century, then one
    // character each for month and day.
    let year = unpack(bytes[20]) * 100 + unpack(bytes[21]) * 10 + unpack(bytes[22]);
    let epoch = JulianDate::from_calendar(
        year,
        unpack(bytes[23]) as u32,
        f64::from(unpack(bytes[24])),
    )?;

    let eccentricity = num_field(line, 70, 9)?;
    let elements = OrbitalElements {
        epoch,
        mean_anomaly: num_field(line, 26, 9)? * DEG_TO_RAD,
        daily_motion: num_field(line, 80, 11)? * DEG_TO_RAD,
        perihelion: (num_field(line, 92, 11)? * (1.0 - eccentricity)).abs(),
        eccentricity,
        arg_perihelion: num_field(line, 37, 9)? * DEG_TO_RAD,
        lon_asc_node: num_field(line, 48, 9)? * DEG_TO_RAD,
        inclination: num_field(line, 59, 9)? * DEG_TO_RAD,
    };

    let position = elements_to_ephemeris(tt, &elements)?;

    Ok(MinorBodyRecord {
        id,
        name,
        class: BodyClass::MinorPlanet,
        absolute_magnitude,
        slope_parameter,
        elements,
        position,
    })
}

/// Parses one line of the MPC comet export and computes the body's
/// heliocentric position at `tt`, in the equinox and ecliptic of J2000.
///
/// The catalog lists the perihelion distance and passage time; the mean
/// motion follows from the semi-major axis, and the mean anomaly at epoch
/// is the motion accumulated since perihelion. Unperturbed solutions
/// carry no epoch of their own and osculate at the perihelion passage.
pub fn comet_record(line: &str, tt: &JulianDate) -> Result<MinorBodyRecord> {
    if line.len() < 103 {
        debug!("comet record is {} characters, need 103", line.len());
        return Err(OrreryError::InvalidData("comet record is too short".into()));
    }
    let bytes = line.as_bytes();

    let id = comet_id(line)?;
    let name = name_field(line, 102)?;

    let class = match bytes[4] {
        b'C' => BodyClass::LongPeriodComet,
        b'P' => BodyClass::ShortPeriodComet,
        b'D' => BodyClass::DefunctComet,
        b'X' => BodyClass::UncertainComet,
        b'A' => BodyClass::MinorPlanet,
        other => {
            debug!("unrecognized orbit type code {:?}", other as char);
            return Err(OrreryError::InvalidData(format!(
                "unrecognized orbit type code {:?}",
                other as char
            )));
        }
    };

    let absolute_magnitude = num_field(line, 91, 4)?;
    let slope_parameter = num_field(line, 96, 5)?;

    let passage = JulianDate::from_calendar(
        int_field(line, 14, 4)?,
        int_field(line, 19, 2)? as u32,
        num_field(line, 22, 7)?,
    )?;

    let epoch = if bytes[81].is_ascii_digit() {
        // Perturbed solutions osculate at their own epoch
        JulianDate::from_calendar(
            int_field(line, 81, 4)?,
            int_field(line, 85, 2)? as u32,
            num_field(line, 87, 2)?,
        )?
    } else {
        passage
    };

    let eccentricity = num_field(line, 41, 8)?;
    let perihelion = num_field(line, 30, 9)?;

    let sma = (perihelion / (1.0 - eccentricity)).abs();
    let daily_motion = GAUSS_GRAV_CONSTANT / (sma * sma.sqrt());
    let mean_anomaly = reduce_angle(
        daily_motion * ((epoch.date1 - passage.date1) + (epoch.date2 - passage.date2)),
        TWO_PI,
    );

    let elements = OrbitalElements {
        epoch,
        mean_anomaly,
        daily_motion,
        perihelion,
        eccentricity,
        arg_perihelion: num_field(line, 51, 8)? * DEG_TO_RAD,
        lon_asc_node: num_field(line, 61, 8)? * DEG_TO_RAD,
        inclination: num_field(line, 71, 8)? * DEG_TO_RAD,
    };

    let position = elements_to_ephemeris(tt, &elements)?;

    Ok(MinorBodyRecord {
        id,
        name,
        class,
        absolute_magnitude,
        slope_parameter,
        elements,
        position,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    /// Lays fields out at fixed columns over a blank line.
    fn record_line(len: usize, fields: &[(usize, &str)]) -> String {
        let mut line = vec![b' '; len];
        for (start, text) in fields {
            line[*start..start + text.len()].copy_from_slice(text.as_bytes());
        }
        String::from_utf8(line).unwrap()
    }

    fn ceres_line() -> String {
        // (1) Ceres at the 2010-07-23 osculation epoch.
        record_line(
            200,
            &[
                (0, "00001"),
                (8, " 3.34"),
                (14, " 0.12"),
                (20, "K107N"),
                (26, "113.41048"),
                (37, " 72.58976"),
                (48, " 80.39321"),
                (59, " 10.58682"),
                (70, "0.0791382"),
                (80, " 0.21432817"),
                (92, "  2.7653485"),
                (166, "(1) Ceres"),
            ],
        )
    }

    #[test]
    fn test_numbered_minor_planet() {
        let tt = JulianDate::new(2_455_400.5, 0.0);
        let rec = minor_planet_record(&ceres_line(), &tt).unwrap();

        assert_eq!(rec.id, "001");
        assert_eq!(rec.name.as_deref(), Some("(1) Ceres"));
        assert_eq!(rec.class, BodyClass::MinorPlanet);
        assert_relative_eq!(rec.absolute_magnitude, 3.34);
        assert_relative_eq!(rec.slope_parameter, 0.12);

        // Packed epoch K107N unpacks to 2010-07-23.
        assert_relative_eq!(rec.elements.epoch.value(), 2_455_400.5);
        assert_relative_eq!(rec.elements.eccentricity, 0.0791382);
        assert_relative_eq!(
            rec.elements.mean_anomaly,
            113.41048 * DEG_TO_RAD,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            rec.elements.perihelion,
            2.7653485 * (1.0 - 0.0791382),
            max_relative = 1e-12
        );

        // Ceres stays between its apsides, roughly 2.5 to 3.0 AU out.
        let r = rec.position.magnitude();
        assert!((2.5..3.0).contains(&r), "Ceres at {} AU", r);
    }

    #[test]
    fn test_provisional_designation_unpacks() {
        let mut fields = vec![
            (0, "K10A01B"),
            (20, "K107N"),
            (70, "0.0791382"),
            (80, " 0.21432817"),
            (92, "  2.7653485"),
        ];
        let line = record_line(160, &fields);
        let tt = JulianDate::new(2_455_400.5, 0.0);
        assert_eq!(minor_planet_record(&line, &tt).unwrap().id, "2010 AB1");

        // Cycle zero is omitted from the unpacked form.
        fields[0] = (0, "K10A00B");
        let line = record_line(160, &fields);
        assert_eq!(minor_planet_record(&line, &tt).unwrap().id, "2010 AB");
    }

    #[test]
    fn test_survey_designation_passes_through() {
        let line = record_line(160, &[(0, "PLS2040"), (20, "J861A")]);
        let tt = JulianDate::new(2_446_440.5, 0.0);
        let rec = minor_planet_record(&line, &tt).unwrap();
        assert_eq!(rec.id, "PLS2040");
        assert!(rec.name.is_none());
    }

    #[test]
    fn test_short_minor_planet_record_is_rejected() {
        let tt = JulianDate::new(2_455_400.5, 0.0);
        let err = minor_planet_record("00001", &tt).unwrap_err();
        assert!(matches!(err, OrreryError::InvalidData(_)));
    }

    fn halley_line() -> String {
        // 1P/Halley, unperturbed solution at the 1986 perihelion.
        record_line(
            111,
            &[
                (0, "0001"),
                (4, "P"),
                (14, "1986"),
                (19, "02"),
                (22, " 9.4589"),
                (30, " 0.587104"),
                (41, "0.967277"),
                (51, "111.8657"),
                (61, " 58.8601"),
                (71, "162.2422"),
                (91, " 5.5"),
                (96, "  6.0"),
                (102, "1P/Halley"),
            ],
        )
    }

    #[test]
    fn test_numbered_comet() {
        let tt = JulianDate::new(2_446_470.5, 0.0);
        let rec = comet_record(&halley_line(), &tt).unwrap();

        assert_eq!(rec.id, "1");
        assert_eq!(rec.name.as_deref(), Some("1P/Halley"));
        assert_eq!(rec.class, BodyClass::ShortPeriodComet);
        assert_relative_eq!(rec.absolute_magnitude, 5.5);
        assert_relative_eq!(rec.slope_parameter, 6.0);

        assert_relative_eq!(rec.elements.eccentricity, 0.967277);
        assert_relative_eq!(rec.elements.perihelion, 0.587104);

        // No epoch column: the elements osculate at perihelion passage,
        // so the mean anomaly there is zero.
        let passage = JulianDate::from_calendar(1986, 2, 9.4589).unwrap();
        assert_relative_eq!(rec.elements.epoch.value(), passage.value());
        assert_abs_diff_eq!(rec.elements.mean_anomaly, 0.0, epsilon = 1e-12);

        // The mean motion follows Kepler's third law for a ~17.9 AU orbit.
        let sma: f64 = 0.587104 / (1.0 - 0.967277);
        assert_relative_eq!(
            rec.elements.daily_motion,
            GAUSS_GRAV_CONSTANT / (sma * sma.sqrt()),
            max_relative = 1e-9
        );

        // Near perihelion passage the comet is well inside 1 AU.
        assert!(rec.position.magnitude() < 1.0);
    }

    #[test]
    fn test_long_period_comet_with_perturbed_epoch() {
        // C/1995 O1 (Hale-Bopp) with an osculation epoch of its own,
        // 19 days before the perihelion passage.
        let line = record_line(
            123,
            &[
                (4, "C"),
                (5, "J95O010"),
                (14, "1997"),
                (19, "04"),
                (22, " 1.1373"),
                (30, " 0.914142"),
                (41, "0.995086"),
                (51, "130.5887"),
                (61, "282.4720"),
                (71, " 89.4300"),
                (81, "19970313"),
                (91, "-1.0"),
                (96, "  4.0"),
                (102, "C/1995 O1 (Hale-Bopp)"),
            ],
        );
        let tt = JulianDate::new(2_450_520.5, 0.0);
        let rec = comet_record(&line, &tt).unwrap();

        assert_eq!(rec.id, "1995 O1");
        assert_eq!(rec.class, BodyClass::LongPeriodComet);
        assert_eq!(rec.name.as_deref(), Some("C/1995 O1 (Hale-Bopp)"));

        let epoch = JulianDate::from_calendar(1997, 3, 13.0).unwrap();
        assert_relative_eq!(rec.elements.epoch.value(), epoch.value());

        // The epoch precedes perihelion, so the accumulated mean anomaly
        // reduces to just under a full turn.
        assert!(rec.elements.mean_anomaly > 6.0);
        assert!(rec.elements.mean_anomaly < TWO_PI);

        // Hale-Bopp was near 0.92 AU around its 1997 perihelion.
        assert!((0.9..1.0).contains(&rec.position.magnitude()));
    }

    #[test]
    fn test_fragment_designation() {
        // Shoemaker-Levy 9 fragment B: a lowercase fragment letter turns
        // into a suffix on the unpacked designation.
        let line = record_line(
            103,
            &[
                (4, "P"),
                (5, "J94P01b"),
                (14, "1994"),
                (19, "07"),
                (22, "16.0"),
                (30, " 0.500000"),
                (41, "0.998000"),
            ],
        );
        let tt = JulianDate::new(2_449_550.5, 0.0);
        let rec = comet_record(&line, &tt).unwrap();
        assert_eq!(rec.id, "1994 P1-B");
    }

    #[test]
    fn test_unrecognized_orbit_type() {
        let line = record_line(
            103,
            &[(4, "Z"), (14, "1994"), (19, "07"), (22, "16.0"), (30, " 0.5"), (41, "0.5")],
        );
        let tt = JulianDate::new(2_449_550.5, 0.0);
        let err = comet_record(&line, &tt).unwrap_err();
        assert!(matches!(err, OrreryError::InvalidData(_)));
    }

    #[test]
    fn test_short_comet_record_is_rejected() {
        let tt = JulianDate::new(2_449_550.5, 0.0);
        assert!(comet_record("0001P", &tt).is_err());
    }
}
