use super::*;
use crate::foundation::error::SpliceError;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "framesplice_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn write_frames(dir: &Path, values: &[u8]) {
    std::fs::create_dir_all(dir).unwrap();
    for (i, v) in values.iter().enumerate() {
        image::RgbImage::from_pixel(4, 4, image::Rgb([*v, 0, 0]))
            .save_with_format(dir.join(format!("{i:03}.png")), image::ImageFormat::Png)
            .unwrap();
    }
}

#[test]
fn job_file_resolves_relative_paths() {
    let dir = temp_dir("job_parse");
    std::fs::create_dir_all(&dir).unwrap();
    let job_path = dir.join("job.json");
    std::fs::write(
        &job_path,
        r#"{ "main": "m", "start": "/abs/s", "end": "e", "out": "o" }"#,
    )
    .unwrap();

    let job = SpliceJob::from_json_file(&job_path).unwrap();
    assert_eq!(job.main, dir.join("m"));
    assert_eq!(job.start, PathBuf::from("/abs/s"));
    assert_eq!(job.out, dir.join("o"));
    assert_eq!(job.params, SpliceParams::default());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn job_file_rejects_unknown_keys() {
    let dir = temp_dir("job_unknown");
    std::fs::create_dir_all(&dir).unwrap();
    let job_path = dir.join("job.json");
    std::fs::write(
        &job_path,
        r#"{ "main": "m", "start": "s", "end": "e", "out": "o", "fps": 30 }"#,
    )
    .unwrap();

    assert!(matches!(
        SpliceJob::from_json_file(&job_path),
        Err(SpliceError::Serde(_))
    ));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn run_job_writes_spliced_frames() {
    let dir = temp_dir("job_run");
    write_frames(&dir.join("main"), &[0, 1, 2, 3, 4, 5]);
    write_frames(&dir.join("start"), &[100]);
    write_frames(&dir.join("end"), &[200, 201, 202]);

    let job = SpliceJob {
        main: dir.join("main"),
        start: dir.join("start"),
        end: dir.join("end"),
        out: dir.join("out"),
        params: SpliceParams::new(2, 2),
    };
    let report = run_job(&job).unwrap();
    assert_eq!(report.plan.output_len, 6);
    assert_eq!(report.written.len(), 6);

    let out = load_sequence(&job.out).unwrap();
    let reds: Vec<u8> = out.iter().map(|f| f.data()[0]).collect();
    assert_eq!(reds, vec![100, 100, 2, 3, 200, 201]);

    std::fs::remove_dir_all(&dir).ok();
}
