use core::time::Duration;

use anyhow::Result;

use super::{expect, publish, Answer, Answers, Bencher, Mode, Opts, Output, OutputKind, Report};

fn args<'a>(args: &'a [&'a str]) -> impl Iterator<Item = Result<String>> + 'a {
    args.iter().map(|arg| Ok(arg.to_string()))
}

#[test]
fn test_parse_opts() {
    let opts = Opts::parse_from(args(&["--bench", "--count", "10", "--json", "--", "--nope"])).unwrap();
    assert!(matches!(opts.mode, Mode::Bench));
    assert_eq!(opts.count, Some(10));
    assert!(opts.json);
    assert!(!opts.verbose);
    assert_eq!(opts.warmup, None);
}

#[test]
fn test_parse_opts_errors() {
    let error = Opts::parse_from(args(&["--bench", "--bench"])).unwrap_err();
    assert_eq!(error.to_string(), "duplicate `--bench` arguments");

    let error = Opts::parse_from(args(&["--warmup"])).unwrap_err();
    assert_eq!(error.to_string(), "missing argument to `--warmup`");

    let error = Opts::parse_from(args(&["--time-limit", "soon"])).unwrap_err();
    assert_eq!(error.to_string(), "bad argument to `--time-limit`");

    let error = Opts::parse_from(args(&["--input", "foo.txt"])).unwrap_err();
    assert_eq!(error.to_string(), "unsupported argument: --input");
}

#[test]
fn test_answers() {
    let labels = ["The total distance is", "The similarity score is"];
    let answers = (11u64, 31i64).answers(&labels);

    assert_eq!(answers[0].to_string(), "The total distance is 11.");
    assert_eq!(answers[1].to_string(), "The similarity score is 31.");

    let answers = (2usize, 4usize).answers(&["The total safe reports:"]);
    assert_eq!(answers[0].to_string(), "The total safe reports: 2.");
    assert_eq!(answers[1], Answer::new(None, 1, 4));
    assert_eq!(answers[1].to_string(), "Part 2: 4.");
}

#[test]
fn test_expect() {
    assert!(expect(&(11u64, 31i64), &(11, 31)).is_ok());

    let error = expect(&(2usize, 5usize), &(2, 4)).unwrap_err();
    assert_eq!(error.to_string(), "(2, 5) (value) != (2, 4) (expected)");
}

#[test]
fn test_json_output() {
    let mut buf = Vec::new();

    {
        let mut o = Output::new(&mut buf, OutputKind::Json);
        o.answer(&Answer::new(Some("The total safe reports:"), 0, 2))
            .unwrap();
        o.info("hello").unwrap();
    }

    let output = String::from_utf8(buf).unwrap();
    let mut lines = output.lines();

    assert_eq!(
        lines.next(),
        Some(r#"{"type":"answer","data":{"label":"The total safe reports:","value":"2"}}"#)
    );
    assert_eq!(
        lines.next(),
        Some(r#"{"type":"message","data":{"kind":"info","output":"hello"}}"#)
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn test_report_from_samples() {
    let samples = (1..=100).map(Duration::from_millis).collect::<Vec<_>>();
    let report = Report::from_samples(&samples);

    assert_eq!(report.count, 100);
    assert_eq!(report.min, Duration::from_millis(1));
    assert_eq!(report.max, Duration::from_millis(100));
    assert_eq!(report.p50, Duration::from_millis(50));
    assert_eq!(report.p95, Duration::from_millis(95));
    assert_eq!(report.p99, Duration::from_millis(99));
    assert_eq!(report.avg, Duration::from_micros(50_500));

    assert_eq!(Report::from_samples(&[]), Report::default());
}

#[test]
fn test_publish_writes_answers() {
    let dir = std::env::temp_dir().join(format!("aoc-lib-publish-{}", std::process::id()));
    let path = dir.join("d01.txt");

    let labels = ["The total distance is", "The similarity score is"];
    publish(&Opts::default(), Some(("answers/d01.txt", path.as_path())), &labels, &(1u128, 0i128)).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, "The total distance is 1.\nThe similarity score is 0.\n");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_bench_checks_every_sample() {
    let opts = Opts::parse_from(args(&["--json", "--warmup", "0", "--count", "2"])).unwrap();

    let mut buf = Vec::new();
    let mut calls = 0;

    {
        let mut o = Output::new(&mut buf, OutputKind::Json);

        Bencher::new()
            .inner_iter(
                &mut o,
                &opts,
                |value: &(u32, u32)| expect(value, &(1, 2)),
                || {
                    calls += 1;
                    Ok::<_, anyhow::Error>((1u32, 2u32))
                },
            )
            .unwrap();
    }

    assert_eq!(calls, 2);

    let output = String::from_utf8(buf).unwrap();

    let reports = output
        .lines()
        .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap())
        .filter(|line| line["type"] == "report")
        .collect::<Vec<_>>();

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0]["data"]["count"], 2);
}

#[test]
fn test_bench_expected_mismatch() {
    let opts = Opts::parse_from(args(&["--warmup", "0", "--count", "2"])).unwrap();

    let error = Bencher::new()
        .iter(&opts, (1, 3), || Ok::<_, anyhow::Error>((1u32, 2u32)))
        .unwrap_err();

    assert_eq!(error.to_string(), "(1, 2) (value) != (1, 3) (expected)");
}
