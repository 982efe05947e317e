//! Human formatting for raw statistic values.

use crate::schema::Unit;

/// Format `value` according to `unit`. Unknown units print the raw integer.
pub fn format_value(value: i128, unit: &Unit) -> String {
    match unit {
        Unit::NanoSeconds => format_nanoseconds(value),
        Unit::MillisSeconds => format_milliseconds(value),
        Unit::Bytes => format_bytes(value),
        Unit::Rows | Unit::Count => format_count(value),
        Unit::Unknown(_) => value.to_string(),
    }
}

pub fn format_nanoseconds(ns: i128) -> String {
    let v = ns as f64;
    match ns {
        0 => "0s".to_string(),
        n if n < 1_000 => format!("{n}ns"),
        n if n < 1_000_000 => format!("{:.2}µs", v / 1e3),
        n if n < 1_000_000_000 => format!("{:.2}ms", v / 1e6),
        _ => format!("{:.2}s", v / 1e9),
    }
}

pub fn format_milliseconds(ms: i128) -> String {
    match ms {
        0 => "0s".to_string(),
        n if n < 1_000 => format!("{n}ms"),
        n => format!("{:.2}s", n as f64 / 1e3),
    }
}

const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

pub fn format_bytes(bytes: i128) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut v = bytes as f64;
    for unit in BYTE_UNITS {
        if v.abs() < 1024.0 {
            return if v.fract() == 0.0 {
                format!("{} {unit}", v as i128)
            } else {
                format!("{v:.2} {unit}")
            };
        }
        v /= 1024.0;
    }
    format!("{v:.2} PB")
}

/// Rows and item counts share one scale: K, M, B (billions).
pub fn format_count(n: i128) -> String {
    let v = n as f64;
    match n {
        0 => "0".to_string(),
        n if n < 1_000 => n.to_string(),
        n if n < 1_000_000 => format!("{:.2}K", v / 1e3),
        n if n < 1_000_000_000 => format!("{:.2}M", v / 1e6),
        _ => format!("{:.2}B", v / 1e9),
    }
}
