use std::io::{self, Write};

use anyhow::Context;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use valuekit::config::RunConfig;
use valuekit::debugger::set_debug_level;
use valuekit::runtime::Runtime;

fn main() -> anyhow::Result<()> {
    let config = RunConfig::from_args(std::env::args().skip(1))?;
    set_debug_level(config.debug_level);

    let mut runtime = Runtime::new(io::stdout());

    match &config.script {
        Some(script) => {
            runtime
                .run_file(script)
                .with_context(|| format!("failed to run {}", script.display()))?;
        }
        None => interactive(&mut runtime)?,
    }

    Ok(())
}

fn interactive<W: Write>(runtime: &mut Runtime<W>) -> anyhow::Result<()> {
    let mut editor = DefaultEditor::new()?;

    println!("valuekit {}", env!("CARGO_PKG_VERSION"));
    println!("Type a statement and press enter. Ctrl+D to exit");

    let mut line_no = 0;
    loop {
        match editor.readline("valuekit> ") {
            Ok(line) => {
                line_no += 1;
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line.as_str());

                if let Err(error) = runtime.run_line(&line, line_no) {
                    println!("{error}");
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(error) => return Err(error.into()),
        }
    }

    Ok(())
}
