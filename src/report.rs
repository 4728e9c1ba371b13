// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Text output of the three subcommands.

use std::io::Write;

use anyhow::{Context, Result};

use lunation::{
    brown_lunation, civil_parts, phase_at, phase_hunt, JulianMoment, PhaseTable, QuarterEvent,
    QuarterKind, ELEMENTS,
};

/// Annotated table: a header with the epoch, then one row per day.
pub fn write_table<W: Write>(out: &mut W, table: &PhaseTable) -> Result<()> {
    let epoch = table.epoch();
    writeln!(out, "# epoch {epoch} ({}), {} days", epoch.to_civil(), table.len())?;
    writeln!(out, "# offset bucket waxing jd date percent")?;
    for (entry, percent) in table.rows() {
        let day = table.day_of(entry);
        writeln!(
            out,
            "{} {} {} {} {} {}",
            entry.day_offset,
            entry.phase_bucket,
            u8::from(entry.waxing),
            day,
            day.to_civil(),
            percent
        )?;
    }
    Ok(())
}

/// Moment as `YYYY-MM-DD HH:MM:SS UTC`.
fn utc_label(moment: JulianMoment) -> String {
    let (date, time) = civil_parts(moment);
    format!("{date} {time} UTC")
}

/// Instantaneous report at `moment`.
pub fn write_phase<W: Write>(out: &mut W, moment: JulianMoment) -> Result<()> {
    let s = phase_at(moment).context("evaluating phase")?;

    let age = s.age.value();
    let days = age.trunc();
    let hours = (age - days) * 24.0;
    let minutes = (hours - hours.trunc()) * 60.0;
    let (date, _) = civil_parts(moment);

    writeln!(out, "Moment:           {} ({})", moment, utc_label(moment))?;
    writeln!(out, "Date:             {} {}, {}", date.day, date.month_name(), date.year)?;
    writeln!(
        out,
        "Age of Moon:      {} days, {} hours, {} minutes",
        days as u32, hours as u32, minutes as u32
    )?;
    writeln!(out, "Moon phase:       {}% (0% = new, 50% = full)", s.percent())?;
    writeln!(out, "Illuminated:      {:.1}%", s.illuminated_fraction * 100.0)?;
    writeln!(
        out,
        "Moon distance:    {:.0} km, {:.1} Earth radii",
        s.moon_distance,
        s.moon_distance / ELEMENTS.earth_radius
    )?;
    writeln!(out, "Moon subtends:    {:.4}°", s.moon_angular_diameter)?;
    writeln!(out, "Moon parallax:    {:.4}°", s.moon_parallax)?;
    writeln!(
        out,
        "Moon position:    longitude {:.3}°, latitude {:.3}°",
        s.moon_longitude, s.moon_latitude
    )?;
    writeln!(
        out,
        "Sun distance:     {:.0} km, {:.4} AU",
        s.sun_distance,
        s.sun_distance / ELEMENTS.sun_semi_major_axis
    )?;
    writeln!(out, "Sun subtends:     {:.4}°", s.sun_angular_diameter)?;
    writeln!(out, "Sun longitude:    {:.3}°", s.sun_longitude)?;
    Ok(())
}

fn event_label(index: usize, event: &QuarterEvent) -> String {
    match (index, event.kind) {
        (0, QuarterKind::NewMoon) => "Last new Moon".to_string(),
        (_, QuarterKind::NewMoon) => "Next new Moon".to_string(),
        (_, kind) => kind.to_string(),
    }
}

/// The five principal phases bracketing `moment`.
pub fn write_hunt<W: Write>(out: &mut W, moment: JulianMoment) -> Result<()> {
    let events = phase_hunt(moment);
    writeln!(out, "Lunation {}", brown_lunation(events[0].moment))?;
    for (i, event) in events.iter().enumerate() {
        writeln!(
            out,
            "{:<15} {}  {}",
            format!("{}:", event_label(i, event)),
            utc_label(event.moment),
            event.moment
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use lunation::{generate, TableConfig};

    fn render<F: FnOnce(&mut Vec<u8>) -> Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn table_rows() {
        let start = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        let table = generate(&TableConfig::new(start).with_years(1)).unwrap();
        let text = render(|out| write_table(out, &table));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2 + 365);
        assert_eq!(lines[0], "# epoch 2451544 (1999-12-31), 365 days");
        assert_eq!(lines[2], "0 11 0 2451544 1999-12-31 81");
        assert!(lines[366].starts_with("364 "));
    }

    #[test]
    fn hunt_report() {
        let text = render(|out| write_hunt(out, JulianMoment::new(2_451_544.5)));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Lunation 952");
        assert!(lines[1].starts_with("Last new Moon:  1999-12-07 22:"), "{}", lines[1]);
        assert!(lines[3].starts_with("Full Moon:      1999-12-22 17:"), "{}", lines[3]);
        assert!(lines[5].starts_with("Next new Moon:  2000-01-06 18:"), "{}", lines[5]);
    }

    #[test]
    fn phase_report() {
        let text = render(|out| write_phase(out, JulianMoment::new(2_451_564.694)));
        assert!(text.contains("Date:             21 January, 2000"));
        assert!(text.contains("Moon phase:       49%") || text.contains("Moon phase:       50%"));
        assert!(text.contains("Age of Moon:      14 days"));
    }
}
