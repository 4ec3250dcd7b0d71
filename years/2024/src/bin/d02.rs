use lib::input::ErrorKind;
use lib::prelude::*;

use std::iter::from_fn;

#[entry(
    input = "d02.txt",
    answers = "d02.txt",
    labels = [
        "The total safe reports:",
        "The total safe reports with removing one:",
    ]
)]
fn main(mut input: IStr) -> Result<(usize, usize)> {
    let mut o1 = 0;
    let mut o2 = 0;

    for report in reports(&mut input) {
        if report.is_safe() {
            o1 += 1;
            o2 += 1;
            continue;
        }

        o2 += usize::from(report.is_safe_dampened());
    }

    Ok((o1, o2))
}

/// The levels of a single report.
#[derive(Debug)]
struct Report(Vec<i64>);

lib::from_input!(|levels: Vec<i64>| -> Report {
    if levels.is_empty() {
        return Err(ErrorKind::ExpectedInteger);
    }

    Ok(Report(levels))
});

impl Report {
    /// Strictly increasing or decreasing by 1 to 3 between every level.
    fn is_safe(&self) -> bool {
        safe(self.0.iter().copied())
    }

    /// Safe once at most one level has been removed.
    fn is_safe_dampened(&self) -> bool {
        self.is_safe() || (0..self.0.len()).any(|n| safe(skip(self.0.iter().copied(), n)))
    }
}

/// Parse every report, skipping malformed lines.
fn reports(input: &mut IStr) -> Vec<Report> {
    let mut reports = Vec::new();

    for mut line in input.lines() {
        if line.is_blank() {
            continue;
        }

        let text = line.as_bstr();

        match line.next::<Report>() {
            Ok(report) => reports.push(report),
            Err(error) => log::warn!("{error}: skipping malformed report {text:?}"),
        }
    }

    log::debug!("read {} reports", reports.len());
    reports
}

#[inline]
fn safe<I>(levels: I) -> bool
where
    I: Clone + Iterator<Item = i64>,
{
    pairs(levels.clone()).all(|(a, b)| inc(a, b)) || pairs(levels).all(|(a, b)| dec(a, b))
}

#[inline]
fn inc(a: i64, b: i64) -> bool {
    dist(a, b) && a < b
}

#[inline]
fn dec(a: i64, b: i64) -> bool {
    dist(a, b) && a > b
}

#[inline]
fn dist(a: i64, b: i64) -> bool {
    matches!(a.abs_diff(b), 1..=3)
}

#[inline]
fn pairs(it: impl IntoIterator<Item = i64>) -> impl Iterator<Item = (i64, i64)> {
    let mut it = it.into_iter();
    let mut buf = it.next();

    from_fn(move || {
        let a = buf.take()?;
        let b = it.next()?;
        buf = Some(b);
        Some((a, b))
    })
}

/// Skip the level at index `redact`.
#[inline]
fn skip<I>(it: I, redact: usize) -> impl Clone + Iterator<Item = i64>
where
    I: Clone + Iterator<Item = i64>,
{
    it.enumerate()
        .filter(move |&(i, _)| redact != i)
        .map(|(_, v)| v)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "7 6 4 2 1\n1 2 7 8 9\n9 7 6 2 1\n1 3 2 4 5\n8 6 4 4 1\n1 3 6 7 9\n";

    fn input(data: &'static str) -> IStr {
        IStr::new("inputs/test.txt", data.as_bytes())
    }

    fn report(levels: &[i64]) -> Report {
        Report(levels.iter().copied().collect())
    }

    #[test]
    fn example() {
        let reports = reports(&mut input(EXAMPLE));

        let safe = reports.iter().map(Report::is_safe).collect::<Vec<_>>();
        assert_eq!(safe, [true, false, false, false, false, true]);

        let dampened = reports
            .iter()
            .map(Report::is_safe_dampened)
            .collect::<Vec<_>>();
        assert_eq!(dampened, [true, false, false, true, true, true]);
    }

    #[test]
    fn equal_levels_are_unsafe() {
        assert!(!report(&[1, 1]).is_safe());
        assert!(!report(&[5, 5, 5]).is_safe_dampened());
    }

    #[test]
    fn short_reports() {
        assert!(report(&[4]).is_safe());
        assert!(!report(&[1, 9]).is_safe());
        assert!(report(&[1, 9]).is_safe_dampened());
    }

    #[test]
    fn remove_first_or_last() {
        assert!(!report(&[9, 1, 2, 3]).is_safe());
        assert!(report(&[9, 1, 2, 3]).is_safe_dampened());
        assert!(report(&[1, 2, 3, 3]).is_safe_dampened());
        assert!(!report(&[1, 2, 9, 10, 11]).is_safe_dampened());
    }

    #[test]
    fn long_reports() {
        let reports = reports(&mut input(
            "1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 \
             21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40\n",
        ));

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].0.len(), 40);
        assert!(reports[0].is_safe());
    }

    #[test]
    fn malformed_reports_are_skipped() {
        let reports = reports(&mut input("1 2 3\n\n4 five 6\n3 2 1\n"));
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[1].0.as_slice(), [3, 2, 1]);
    }
}
