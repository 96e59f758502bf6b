//! Text rendering for command output.

use std::fmt::Write;

use fg_core::{ChannelIdSet, Decade, FilterCriteria, Genre, sorted_ids};
use fg_filters::{GroupSelection, Selection, TelemetryEvent};

/// Renders the channel sidebar.
pub fn render_selection(selection: &Selection<'_>) -> String {
    if selection.loading {
        return String::from("Channel list loading\n");
    }

    let mut output = String::new();
    for (index, group) in selection.groups().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        render_group(&mut output, group);
    }

    if output.is_empty() {
        output.push_str("No channels\n");
    }
    output
}

fn render_group(output: &mut String, group: &GroupSelection<'_>) {
    let _ = writeln!(
        output,
        "{} ({}/{} shown) [{}]",
        group.title(),
        group.shown_count(),
        group.rows.len(),
        group.bulk.label()
    );
    for row in &group.rows {
        let mark = if row.shown { 'x' } else { ' ' };
        let _ = writeln!(output, "  [{mark}] #{} {}", row.channel.id, row.channel.name);
    }
}

/// Renders the filter criteria as aligned key/value lines.
pub fn render_criteria(criteria: &FilterCriteria) -> String {
    let genre = criteria.genre.map_or("any", Genre::as_str);
    let year = criteria.year.map_or("any", Decade::label);
    let national = if criteria.national_only { "yes" } else { "no" };

    let mut output = String::new();
    let _ = writeln!(output, "sort:            {}", criteria.sort.label());
    let _ = writeln!(output, "genre:           {genre}");
    let _ = writeln!(output, "year:            {year}");
    let _ = writeln!(output, "national only:   {national}");
    let _ = writeln!(output, "search:          {:?}", criteria.search);
    let _ = writeln!(output, "hidden premium:  {}", id_list(&criteria.premium));
    let _ = writeln!(output, "hidden channels: {}", id_list(&criteria.channels));
    output
}

fn id_list(ids: &ChannelIdSet) -> String {
    if ids.is_empty() {
        return String::from("none");
    }
    sorted_ids(ids)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders a telemetry log, one event per line.
pub fn render_events(events: &[TelemetryEvent]) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Telemetry ({} events)", events.len());
    for event in events {
        let _ = writeln!(output, "  {} {}", event.name(), event.props());
    }
    output
}
