use std::fs;
use std::path::{Path, PathBuf};

use valuekit::loader::ModuleLoader;
use valuekit::runtime::Runtime;

use super::init_debug_for_tests;

/// A scratch directory of units plus a runtime rooted at it.
pub struct TestEnv {
    pub dir: PathBuf,
    pub runtime: Runtime<Vec<u8>>,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        init_debug_for_tests();

        let dir = std::env::temp_dir().join(format!("valuekit_test_{}", rand::random::<u64>()));
        fs::create_dir_all(&dir).unwrap();

        let runtime = Runtime::with_loader(Vec::new(), ModuleLoader::with_root(&dir));
        Self { dir, runtime }
    }

    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn canonical(&self, relative: &str) -> PathBuf {
        fs::canonicalize(self.dir.join(relative)).unwrap()
    }

    pub fn run_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        self.runtime.run_file(path)?;
        Ok(())
    }

    pub fn stdout(&self) -> String {
        String::from_utf8(self.runtime.output().clone()).unwrap()
    }
}
