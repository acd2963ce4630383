//! Number formatting for chart annotations, axis ticks and metric cards.

/// How a chart annotates its bar values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// Two decimal places, no prefix: `82.00`.
    Decimal2,
    /// Dollar prefix, thousands separators, no decimals: `$200,000`.
    Currency,
}

impl ValueFormat {
    pub fn format(self, value: f64) -> String {
        match self {
            ValueFormat::Decimal2 => format!("{value:.2}"),
            ValueFormat::Currency => format!("${}", group_thousands(value, 0)),
        }
    }
}

/// Format `value` with `decimals` places and `,` between thousands groups.
pub fn group_thousands(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }

    // "-0.00" reads wrong; only keep the sign when a digit survived rounding.
    let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
    if value.is_sign_negative() && !is_zero {
        grouped.insert(0, '-');
    }
    grouped
}

/// Axis tick text: integers get thousands separators, fractional steps keep
/// just enough decimals to tell ticks apart.
pub fn format_tick(value: f64, step: f64) -> String {
    if step >= 1.0 {
        group_thousands(value, 0)
    } else {
        let mut decimals = 1;
        while decimals < 6 {
            let scaled = step * 10f64.powi(decimals as i32);
            if (scaled - scaled.round()).abs() < 1e-9 {
                break;
            }
            decimals += 1;
        }
        group_thousands(value, decimals)
    }
}
