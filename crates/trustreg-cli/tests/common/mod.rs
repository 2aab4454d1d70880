use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// v3 harm 6 / utility 2, rf 3 / 0, xgb 5 / 3
pub const DECISIONS: &str = "\
id,binary_violation,TrustReg_v3,TrustReg_rf,TrustReg_xgb
1,1,APPROVE,BLOCK,APPROVE
2,0,APPROVE,BLOCK,APPROVE
3,0,BLOCK,BLOCK,BLOCK
4,1,BLOCK,BLOCK,APPROVE
5,1,APPROVE,BLOCK,APPROVE
";

pub struct TestEnv {
    tmp: TempDir,
}

impl TestEnv {
    /// Temp project with `outputs/trustreg_model_comparison.csv`
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let outputs = tmp.path().join("project").join("outputs");
        fs::create_dir_all(&outputs).expect("create outputs dir");
        fs::write(outputs.join("trustreg_model_comparison.csv"), DECISIONS)
            .expect("write decisions");
        Self { tmp }
    }

    pub fn project(&self) -> PathBuf {
        self.tmp.path().join("project")
    }

    pub fn path(&self) -> &Path {
        self.tmp.path()
    }

    /// The binary, run from the project directory with a clean environment
    pub fn cmd(&self) -> Command {
        self.cmd_in(&self.project())
    }

    pub fn cmd_in(&self, dir: &Path) -> Command {
        let mut cmd = cargo_bin_cmd!("trustreg");
        cmd.current_dir(dir)
            .env_remove("TRUSTREG_DATA")
            .env_remove("TRUSTREG_PRIMARY_COLUMN")
            .env_remove("RUST_LOG");
        cmd
    }
}
