use std::{
    process::Stdio,
    thread,
    time::{Duration, Instant},
};

use anyhow::{Result, bail};

use crate::CliTest;

/// Poll `condition` until it holds or the timeout expires.
fn wait_for(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let start = Instant::now();
    while start.elapsed() < timeout {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(50));
    }
    false
}

#[test]
fn test_watch_regenerates_on_change() -> Result<()> {
    let test = CliTest::with_file("en.ftl", "a = A\n")?;

    let mut child = test
        .command()
        .arg("--watch")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    let timeout = Duration::from_secs(10);
    let initial = wait_for(timeout, || {
        test.read_file("src/locales.types.ts")
            .is_ok_and(|text| text.contains("\"a\": never"))
    });

    // Make sure the modification time moves past the watcher's baseline.
    thread::sleep(Duration::from_millis(1100));
    test.write_file("en.ftl", "a = A { $added }\n")?;

    let regenerated = wait_for(timeout, || {
        test.read_file("src/locales.types.ts")
            .is_ok_and(|text| text.contains("\"added\": FluentVariable"))
    });

    let still_running = child.try_wait()?.is_none();
    child.kill()?;
    child.wait()?;

    if !initial {
        bail!("initial generation did not happen");
    }
    if !regenerated {
        bail!("output was not regenerated after the input changed");
    }
    assert!(still_running, "watch mode exited on its own");

    Ok(())
}
