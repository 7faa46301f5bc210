use crate::number::NumberLocale;
use crate::uptime::{format_uptime_with, UptimeStyle};
use std::io::{self, Write};

pub fn write_uptime<W: Write>(out: &mut W, total_seconds: u64, style: UptimeStyle) -> io::Result<()> {
    writeln!(out, "{}", format_uptime_with(total_seconds, style))
}

pub fn write_locale_number<W: Write>(out: &mut W, value: f64, locale: NumberLocale) -> io::Result<()> {
    writeln!(out, "{}", locale.format_float(value))
}

/// Writes the status block shown on the device page.
pub struct Reporter {
    locale: NumberLocale,
    style: UptimeStyle,
}

impl Reporter {
    pub fn new(locale: NumberLocale, style: UptimeStyle) -> Self {
        Self { locale, style }
    }

    pub fn report<W: Write>(
        &self,
        out: &mut W,
        uptime_secs: u64,
        counters: &[(&str, f64)],
    ) -> io::Result<()> {
        writeln!(out, "Status")?;
        writeln!(out, "======")?;
        writeln!(
            out,
            "Uptime:        {}",
            format_uptime_with(uptime_secs, self.style)
        )?;
        writeln!(
            out,
            "Uptime (secs): {}",
            self.locale.format_uint(uptime_secs)
        )?;

        for (label, value) in counters {
            writeln!(out, "{:<15}{}", format!("{}:", label), self.locale.format_float(*value))?;
        }

        Ok(())
    }
}
