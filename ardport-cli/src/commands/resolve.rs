//! `--serialnum` implementation.

use {
    anyhow::Result,
    ardport::{PortEnumerator, Resolver},
};

/// Resolve command implementation.
///
/// Prints only the device path on success so the output can be used
/// directly, e.g. `avrdude -P "$(arduino-device -s ...)"`.
pub(crate) fn cmd_resolve<E: PortEnumerator>(enumerator: &E, serial: &str, json: bool) -> Result<()> {
    println!("{}", resolve_output(enumerator, serial, json)?);
    Ok(())
}

/// Render the resolved port, without a trailing newline.
pub(crate) fn resolve_output<E: PortEnumerator>(
    enumerator: &E,
    serial: &str,
    json: bool,
) -> Result<String> {
    let port = Resolver::new(enumerator).resolve(serial)?;

    if json {
        let output = serde_json::json!({
            "ok": true,
            "data": {
                "serial_number": serial,
                "port": port,
            }
        });
        return Ok(serde_json::to_string_pretty(&output)?);
    }

    Ok(port.device_path)
}
