use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::foundation::error::SpliceResult;
use crate::io::image_dir::{load_sequence, save_sequence};
use crate::splice::pipeline::{SpliceParams, SplicePlan, plan_splice, replace_first_last_frames};

/// A splice described as JSON: where the three sequences live, where to write, and how many
/// frames to replace.
///
/// ```json
/// { "main": "shots/main", "start": "intro.png", "end": "outro", "out": "spliced",
///   "params": { "start_frames": 2, "end_frames": 2 } }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpliceJob {
    /// Sequence being edited (image file or directory).
    pub main: PathBuf,
    /// Donor for the leading frames.
    pub start: PathBuf,
    /// Donor for the trailing frames.
    pub end: PathBuf,
    /// Output directory for the spliced PNG frames.
    pub out: PathBuf,
    /// Replacement counts; defaults to one frame each.
    #[serde(default)]
    pub params: SpliceParams,
}

impl SpliceJob {
    /// Read a job file. Relative paths inside it resolve against the file's directory.
    pub fn from_json_file(path: &Path) -> SpliceResult<Self> {
        let f = File::open(path).with_context(|| format!("open job file '{}'", path.display()))?;
        let job: Self = serde_json::from_reader(BufReader::new(f))?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Ok(job.resolve_relative_to(base))
    }

    /// Prefix every relative path with `base`.
    pub fn resolve_relative_to(self, base: &Path) -> Self {
        let fix = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        Self {
            main: fix(self.main),
            start: fix(self.start),
            end: fix(self.end),
            out: fix(self.out),
            params: self.params,
        }
    }
}

/// Outcome of [`run_job`].
#[derive(Clone, Debug, serde::Serialize)]
pub struct JobReport {
    /// Frame bookkeeping that was applied.
    pub plan: SplicePlan,
    /// PNG files written, in frame order.
    pub written: Vec<PathBuf>,
}

/// Load the job's sequences, splice them and write the result.
#[tracing::instrument(skip_all, fields(main = %job.main.display(), out = %job.out.display()))]
pub fn run_job(job: &SpliceJob) -> SpliceResult<JobReport> {
    job.params.validate()?;
    let main = load_sequence(&job.main)?;
    let start = load_sequence(&job.start)?;
    let end = load_sequence(&job.end)?;

    let plan = plan_splice(main.len(), job.params)?;
    let spliced = replace_first_last_frames(&main, &start, &end, job.params)?;
    let written = save_sequence(&spliced, &job.out)?;

    tracing::info!(
        frames = written.len(),
        start = plan.counts.start,
        end = plan.counts.end,
        "wrote spliced sequence"
    );
    Ok(JobReport { plan, written })
}

#[cfg(test)]
#[path = "../../tests/unit/io/job.rs"]
mod tests;
