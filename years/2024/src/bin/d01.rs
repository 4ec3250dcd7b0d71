use lib::prelude::*;

#[entry(
    input = "d01.txt",
    answers = "d01.txt",
    labels = ["The total distance is", "The similarity score is"]
)]
fn main(mut input: IStr) -> Result<(u128, i128)> {
    let (mut left, mut right) = lists(&mut input);
    let o2 = similarity_score(&left, &right);
    let o1 = total_distance(&mut left, &mut right);
    Ok((o1, o2))
}

/// Parse the left and right location lists, skipping malformed lines.
fn lists(input: &mut IStr) -> (Vec<i64>, Vec<i64>) {
    let mut left = Vec::new();
    let mut right = Vec::new();

    for mut line in input.lines() {
        if line.is_blank() {
            continue;
        }

        let text = line.as_bstr();

        match line.next::<(i64, i64)>() {
            Ok((l, r)) => {
                left.push(l);
                right.push(r);
            }
            Err(error) => {
                log::warn!("{error}: skipping malformed line {text:?}");
            }
        }
    }

    log::debug!("read {} location pairs", left.len());
    (left, right)
}

/// Sum of distances between the lists once both are sorted.
///
/// Summed as `u128` so that no input can overflow it.
fn total_distance(left: &mut [i64], right: &mut [i64]) -> u128 {
    if left.len() != right.len() {
        return 0;
    }

    left.sort_unstable();
    right.sort_unstable();

    left.iter()
        .zip(right.iter())
        .map(|(l, r)| u128::from(l.abs_diff(*r)))
        .sum()
}

/// Every value in `left` weighted by how often it occurs in `right`.
///
/// Summed as `i128` so that no input can overflow it.
fn similarity_score(left: &[i64], right: &[i64]) -> i128 {
    if left.len() != right.len() {
        return 0;
    }

    let mut score = 0;

    for l in left {
        let mut c = 0i128;

        for r in right {
            if l == r {
                c += 1;
            }
        }

        score += i128::from(*l) * c;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";

    fn input(data: &'static str) -> IStr {
        IStr::new("inputs/test.txt", data.as_bytes())
    }

    #[test]
    fn example() {
        let (mut left, mut right) = lists(&mut input(EXAMPLE));
        assert_eq!(left, [3, 4, 2, 1, 3, 3]);
        assert_eq!(similarity_score(&left, &right), 31);
        assert_eq!(total_distance(&mut left, &mut right), 11);
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let (left, right) = lists(&mut input("1 2\n\nthree 4\n5\n6 7 8\n"));
        assert_eq!(left, [1, 6]);
        assert_eq!(right, [2, 7]);
    }

    #[test]
    fn negative_values() {
        let (mut left, mut right) = lists(&mut input("-3 4\n2 -3\n"));
        assert_eq!(total_distance(&mut left, &mut right), 2);
        assert_eq!(similarity_score(&[-3, 2], &[4, -3]), -3);
    }

    #[test]
    fn large_values_do_not_overflow() {
        let max = i64::MAX;
        let min = i64::MIN;

        let mut left = vec![max, max, max];
        let mut right = vec![max, max, min];

        assert_eq!(similarity_score(&left, &right), i128::from(max) * 6);
        assert_eq!(total_distance(&mut left, &mut right), u128::from(u64::MAX));
    }

    #[test]
    fn answers_for_other_inputs() {
        let (mut left, mut right) = lists(&mut input("1 2\nfoo 3\n"));
        assert_eq!(similarity_score(&left, &right), 0);
        assert_eq!(total_distance(&mut left, &mut right), 1);
    }

    #[test]
    fn mismatched_lengths() {
        assert_eq!(total_distance(&mut [1, 2], &mut [1]), 0);
        assert_eq!(similarity_score(&[1, 2], &[1]), 0);
    }

    #[test]
    fn empty_input() {
        let (mut left, mut right) = lists(&mut input(""));
        assert_eq!(total_distance(&mut left, &mut right), 0);
        assert_eq!(similarity_score(&left, &right), 0);
    }
}
