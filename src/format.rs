//! Display helpers for earnings, shares and labels.

/// SI prefixes from 10^0 upward in steps of 10^3.
const SI_PREFIXES: [&str; 6] = ["", "k", "M", "G", "T", "P"];

/// Abbreviate prize money: `$1.2B`, `$3.4M`, `$5.6K`, `$789`.
///
/// Zero, negative and NaN values render as `$0`.
pub fn format_money_short(value: f64) -> String {
    if !(value > 0.0) {
        return "$0".to_string();
    }
    if value >= 1_000_000_000.0 {
        format!("${:.1}B", value / 1_000_000_000.0)
    } else if value >= 1_000_000.0 {
        format!("${:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.1}K", value / 1_000.0)
    } else {
        format!("${:.0}", value)
    }
}

/// Share as a percentage with one decimal: `0.6` → `60.0%`.
pub fn format_percent(share: f64) -> String {
    format!("{:.1}%", share * 100.0)
}

/// Earnings per player, or `N/A` when there are no players.
pub fn format_per_player(earnings: f64, players: f64) -> String {
    if !(players > 0.0) {
        return "N/A".to_string();
    }
    let v = earnings / players;
    if v >= 1_000_000.0 {
        format!("${:.1}M / player", v / 1_000_000.0)
    } else if v >= 1_000.0 {
        format!("${:.1}K / player", v / 1_000.0)
    } else {
        format!("${:.0} / player", v)
    }
}

/// SI notation with up to six significant digits and trailing zeros
/// trimmed: `12000` → `12k`, `2500000` → `2.5M`, `1e9` → `1G`.
pub fn format_si(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let rounded = round_significant(value.abs(), 6);

    let group = if rounded >= 1.0 {
        ((rounded.log10().floor() as usize) / 3).min(SI_PREFIXES.len() - 1)
    } else {
        0
    };
    let scaled = rounded / 10f64.powi(3 * group as i32);
    let int_digits = if scaled >= 1.0 {
        scaled.log10().floor() as i32 + 1
    } else {
        1
    };
    let decimals = (6 - int_digits).max(0) as usize;

    let text = format!("{:.*}", decimals, scaled);
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text.as_str()
    };
    format!("{}{}{}", sign, text, SI_PREFIXES[group])
}

fn round_significant(value: f64, digits: i32) -> f64 {
    if value == 0.0 {
        return 0.0;
    }
    let shift = digits - 1 - value.log10().floor() as i32;
    if shift >= 0 {
        let factor = 10f64.powi(shift);
        (value * factor).round() / factor
    } else {
        let factor = 10f64.powi(-shift);
        (value / factor).round() * factor
    }
}

/// Dollar range for a histogram bin given in log10 bounds: `$10k – $100k`.
pub fn format_money_range(from_log: f64, to_log: f64) -> String {
    format!(
        "${} – ${}",
        format_si(10f64.powf(from_log)),
        format_si(10f64.powf(to_log))
    )
}

/// Split a label into at most two lines at its last space.
pub fn split_label(name: &str) -> Vec<String> {
    match name.rsplit_once(' ') {
        Some((head, last)) if !head.is_empty() => vec![head.to_string(), last.to_string()],
        _ => vec![name.to_string()],
    }
}
