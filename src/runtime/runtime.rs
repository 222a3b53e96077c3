use std::io::Write;
use std::path::Path;

use crate::debugger::DebugLevel;
use crate::format::formatter;
use crate::frontend::script::ast::{Initializer, Spanned, Statement};
use crate::frontend::script::parser::{parse_line, parse_unit};
use crate::holder::holder::ValueHolder;
use crate::loader::errors::LoadError;
use crate::loader::loader::{Begin, LoadOutcome, ModuleLoader};
use crate::runtime::errors::ScriptError;
use crate::runtime::namespace::{Binding, Namespace};
use crate::{vk_debug, vk_error, vk_info, vk_scope, vk_trace};

/// Executes units against one shared namespace, writing `print` output to `out`.
pub struct Runtime<W: Write> {
    namespace: Namespace,
    loader: ModuleLoader,
    out: W,
}

impl<W: Write> Runtime<W> {
    pub fn new(out: W) -> Self {
        Self::with_loader(out, ModuleLoader::new())
    }

    pub fn with_loader(out: W, loader: ModuleLoader) -> Self {
        Self {
            namespace: Namespace::new(),
            loader,
            out,
        }
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn loader(&self) -> &ModuleLoader {
        &self.loader
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn execute(&mut self, stmt: &Statement) -> Result<(), ScriptError> {
        match stmt {
            Statement::Let { name, init } => {
                let binding = match init {
                    Initializer::Scalar(v) => Binding::Scalar(v.clone()),
                    Initializer::Sequence(items) => {
                        Binding::Holder(ValueHolder::new(items.clone()))
                    }
                };
                self.namespace.define(name.as_str(), binding)?;
                vk_trace!("runtime", "defined {} = {}", name, init.literal());
            }

            Statement::Print { template } => {
                // rendered in full before anything reaches the sink
                let line = formatter::render(template, &self.namespace)?;
                writeln!(self.out, "{line}")?;
                self.out.flush()?;
            }

            Statement::Load { path } => {
                self.load(path)?;
            }

            Statement::Raise { message } => {
                return Err(ScriptError::Raised {
                    message: message.clone(),
                });
            }
        }

        Ok(())
    }

    /// Runs `source` as top-level code; relative loads resolve against the
    /// loader root.
    pub fn run_source(&mut self, source: &str) -> Result<(), ScriptError> {
        let statements = parse_unit(source)?;
        self.run_statements(&statements)
    }

    /// Runs a single line, as typed into the interactive session.
    pub fn run_line(&mut self, line: &str, line_no: usize) -> Result<(), ScriptError> {
        match parse_line(line, line_no)? {
            Some(spanned) => self.execute(&spanned.stmt),
            None => Ok(()),
        }
    }

    /// Runs `path` as a root unit through the loader.
    pub fn run_file(&mut self, path: impl AsRef<Path>) -> Result<LoadOutcome, ScriptError> {
        Ok(self.load(path)?)
    }

    /// Loads the unit at `path`, relative to the executing unit, at most once.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadOutcome, LoadError> {
        let unit = match self.loader.begin(path)? {
            Begin::AlreadyLoaded(resolved) => return Ok(LoadOutcome::AlreadyLoaded(resolved)),
            Begin::Fresh(unit) => unit,
        };

        let result = vk_scope!(DebugLevel::Info, "loader", unit.path.display(), {
            parse_unit(&unit.source)
                .map_err(ScriptError::from)
                .and_then(|statements| self.run_statements(&statements))
        });
        self.loader.finish(&unit, result.is_ok());

        match result {
            Ok(()) => {
                vk_info!("loader", "loaded {}", unit.path.display());
                Ok(LoadOutcome::Loaded(unit.path))
            }
            Err(source) => {
                vk_error!("loader", "{} failed: {}", unit.path.display(), source);
                Err(LoadError::Execution {
                    path: unit.path,
                    source: Box::new(source),
                })
            }
        }
    }

    fn run_statements(&mut self, statements: &[Spanned]) -> Result<(), ScriptError> {
        for spanned in statements {
            vk_debug!("runtime", "line {}: {:?}", spanned.position.line, spanned.stmt);
            self.execute(&spanned.stmt)?;
        }
        Ok(())
    }
}
