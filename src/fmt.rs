//! Human readable rendering of magnitudes and timestamps

use std::time::Duration;

use chrono::{DateTime, Local, TimeZone};

/// Direction in which a [`Ladder`] is walked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scale {
    /// Emit while the value is below the factor, otherwise divide
    Up,
    /// Emit while the value is above one, otherwise multiply
    Down,
}

/// An ordered sequence of unit labels separated by a fixed factor
#[derive(Clone, Copy, Debug)]
struct Ladder {
    units: &'static [&'static str],
    overflow: &'static str,
    factor: f64,
    scale: Scale,
}

const BYTES: Ladder = Ladder {
    units: &["B", "KB", "MB", "GB"],
    overflow: "TB",
    factor: 1024.0,
    scale: Scale::Up,
};

const FLOPS: Ladder = Ladder {
    units: &["FLOP", "KFLOP", "MFLOP", "GFLOP", "TFLOP"],
    overflow: "PFLOP",
    factor: 1024.0,
    scale: Scale::Up,
};

const SECONDS: Ladder = Ladder {
    units: &[
        "seconds",
        "milliseconds",
        "microseconds",
        "nanoseconds",
        "picoseconds",
    ],
    overflow: "femto",
    factor: 1000.0,
    scale: Scale::Down,
};

const METERS: Ladder = Ladder {
    units: &["meters", "millimeters", "microns", "nanometers", "picometers"],
    overflow: "femtometers",
    factor: 1000.0,
    scale: Scale::Down,
};

impl Ladder {
    fn render(&self, mut value: f64) -> String {
        for unit in self.units {
            let fits = match self.scale {
                Scale::Up => value < self.factor,
                Scale::Down => value > 1.0,
            };

            if fits {
                return format!("{:.1} {}", value, unit);
            }

            value = match self.scale {
                Scale::Up => value / self.factor,
                Scale::Down => value * self.factor,
            };
        }

        // Out of rungs: truncate toward zero, printing every integral digit.
        // Adding zero turns a truncated `-0` into `0`; NaN and infinities pass through.
        format!("{:.0} {}", value.trunc() + 0.0, self.overflow)
    }
}

/// Renders a byte count, e.g. `"2.0 KB"`
pub fn human_bytes(num_bytes: f64) -> String {
    BYTES.render(num_bytes)
}

/// Renders a number of floating point operations, e.g. `"3.5 GFLOP"`
pub fn human_flops(num_flops: f64) -> String {
    FLOPS.render(num_flops)
}

/// Renders a number of seconds.
///
/// Anything above a minute is reported in minutes; shorter spans walk down
/// from seconds to picoseconds.
pub fn human_seconds(seconds: f64) -> String {
    if seconds > 60.0 {
        return format!("{:.1} minutes", seconds / 60.0);
    }

    SECONDS.render(seconds)
}

/// Renders a [`Duration`] using [`human_seconds`]
pub fn human_duration(duration: Duration) -> String {
    human_seconds(duration.as_secs_f64())
}

/// Renders a length given in meters, walking down to picometers
pub fn human_length(meters: f64) -> String {
    METERS.render(meters)
}

const TIMESTAMP_FORMAT: &str = "%Y_%m_%d_%H_%M_%S";

/// Current local time as `YYYY_MM_DD_HH_MM_SS`
pub fn now_str() -> String {
    timestamp_str(&Local::now())
}

/// Formats `datetime` as `YYYY_MM_DD_HH_MM_SS`
pub fn timestamp_str<Tz>(datetime: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    datetime.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, "0.0 B")]
    #[case(500.0, "500.0 B")]
    #[case(1023.0, "1023.0 B")]
    #[case(1024.0, "1.0 KB")]
    #[case(2048.0, "2.0 KB")]
    #[case(1536.0 * 1024.0, "1.5 MB")]
    #[case(5.0 * 1024f64.powi(3), "5.0 GB")]
    #[case(1024f64.powi(4), "1 TB")]
    #[case(2.7 * 1024f64.powi(4), "2 TB")]
    #[case(1e40, "9094947017729282655442173952 TB")]
    #[case(f64::INFINITY, "inf TB")]
    #[case(f64::NAN, "NaN TB")]
    fn test_human_bytes(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(human_bytes(value), expected);
    }

    #[rstest]
    #[case(12.0, "12.0 FLOP")]
    #[case(1024.0, "1.0 KFLOP")]
    #[case(3.5 * 1024f64.powi(3), "3.5 GFLOP")]
    #[case(1023.0 * 1024f64.powi(4), "1023.0 TFLOP")]
    #[case(1024f64.powi(5), "1 PFLOP")]
    fn test_human_flops(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(human_flops(value), expected);
    }

    #[test]
    fn test_overflow_keeps_every_digit() {
        let rendered = human_flops(1e300);
        let digits = rendered.strip_suffix(" PFLOP").unwrap();

        assert_eq!(digits.len(), 285);
        assert!(digits.chars().all(|c| c.is_ascii_digit()), "{}", rendered);
    }

    #[rstest]
    #[case(90.0, "1.5 minutes")]
    #[case(3600.0, "60.0 minutes")]
    #[case(60.0, "60.0 seconds")]
    #[case(2.0, "2.0 seconds")]
    #[case(0.5, "500.0 milliseconds")]
    #[case(1.0, "1000.0 milliseconds")]
    #[case(0.000_25, "250.0 microseconds")]
    #[case(0.0, "0 femto")]
    #[case(-1e-20, "0 femto")]
    #[case(f64::NAN, "NaN femto")]
    fn test_human_seconds(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(human_seconds(value), expected);
    }

    #[test]
    fn test_human_seconds_minutes_short_circuit() {
        for seconds in [60.5, 61.0, 125.0, 7200.0, 1e6] {
            assert_eq!(
                human_seconds(seconds),
                format!("{:.1} minutes", seconds / 60.0)
            );
        }
    }

    #[rstest]
    #[case(3.0, "3.0 meters")]
    #[case(0.25, "250.0 millimeters")]
    #[case(1.0, "1000.0 millimeters")]
    #[case(0.0, "0 femtometers")]
    fn test_human_length(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(human_length(value), expected);
    }

    #[test]
    fn test_small_magnitudes_fall_through() {
        // 2e-12 only clears the threshold at the picometer rung
        assert_eq!(human_length(2e-12), "2.0 picometers");
        assert!(human_seconds(5e-16).ends_with(" femto"));
        assert!(human_length(5e-16).ends_with(" femtometers"));
    }

    #[test]
    fn test_byte_unit_index() {
        let units = ["B", "KB", "MB", "GB"];
        for value in [1.0, 700.0, 4096.0, 3e6, 9e9, 1e11] {
            let rendered = human_bytes(value);
            let (number, unit) = rendered.split_once(' ').unwrap();
            let index = units.iter().position(|u| *u == unit).unwrap();
            let scaled = value / 1024f64.powi(index as i32);

            assert!((0.0..1024.0).contains(&scaled), "{}", rendered);
            assert_eq!(number, format!("{:.1}", scaled));
        }
    }

    #[test]
    fn test_formatting_is_pure() {
        for value in [0.0, 0.5, 42.0, 1e9] {
            assert_eq!(human_bytes(value), human_bytes(value));
            assert_eq!(human_seconds(value), human_seconds(value));
        }
    }

    #[test]
    fn test_human_duration() {
        assert_eq!(
            human_duration(Duration::from_millis(250)),
            "250.0 milliseconds"
        );
    }

    #[test]
    fn test_timestamp_str() {
        let datetime = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 1).unwrap();
        assert_eq!(timestamp_str(&datetime), "2024_03_07_09_05_01");
    }

    #[test]
    fn test_now_str_shape() {
        let now = now_str();
        let fields = now.split('_').collect::<Vec<_>>();

        assert_eq!(now.len(), 19);
        assert_eq!(fields.len(), 6);
        assert!(fields
            .iter()
            .all(|field| field.chars().all(|c| c.is_ascii_digit())));
    }
}
