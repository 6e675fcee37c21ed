//! `--list` implementation.

use {
    anyhow::{Context, Result},
    ardport::{ARDUINO_MANUFACTURER_PATTERN, PortDescriptor, PortEnumerator, filter_by_manufacturer},
    log::debug,
};

/// Options for the board listing.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ListOptions<'a> {
    /// Manufacturer substring to filter by.
    pub pattern: &'a str,
    /// Skip the manufacturer filter.
    pub all: bool,
    /// Output as JSON.
    pub json: bool,
}

/// List command implementation.
pub(crate) fn cmd_list<E: PortEnumerator>(enumerator: &E, options: ListOptions<'_>) -> Result<()> {
    print!("{}", list_output(enumerator, options)?);
    Ok(())
}

/// Render the listing for one fresh enumeration.
pub(crate) fn list_output<E: PortEnumerator>(
    enumerator: &E,
    options: ListOptions<'_>,
) -> Result<String> {
    let ports = enumerator
        .list_ports()
        .context("Failed to list serial ports")?;

    let selected: Vec<&PortDescriptor> = if options.all {
        ports.iter().collect()
    } else {
        filter_by_manufacturer(&ports, options.pattern).collect()
    };
    debug!(
        "Listing {} of {} port(s)",
        selected.len(),
        ports.len()
    );

    if options.json {
        let output = serde_json::json!({
            "ok": true,
            "data": {
                "manufacturer": (!options.all).then_some(options.pattern),
                "ports": selected,
            }
        });
        return Ok(format!(
            "{}\n",
            serde_json::to_string_pretty(&output)?
        ));
    }

    let mut lines = vec![header(options)];
    lines.extend(format_serial_list(&selected, options.all));
    Ok(lines.join("\n") + "\n")
}

fn header(options: ListOptions<'_>) -> String {
    if options.all {
        "Connected Serial Ports:".to_string()
    } else if options
        .pattern
        .eq_ignore_ascii_case(ARDUINO_MANUFACTURER_PATTERN)
    {
        "Connected Arduino Serial Numbers:".to_string()
    } else {
        format!("Connected '{}' Serial Numbers:", options.pattern)
    }
}

/// Format one line per port, or a placeholder line when there are none.
pub(crate) fn format_serial_list(ports: &[&PortDescriptor], with_paths: bool) -> Vec<String> {
    if ports.is_empty() {
        return vec!["    (none found)".to_string()];
    }

    ports
        .iter()
        .map(|port| {
            let serial = port
                .serial()
                .unwrap_or("(no serial number)");
            if with_paths {
                format!("    - {serial} ({})", port.device_path)
            } else {
                format!("    - {serial}")
            }
        })
        .collect()
}
