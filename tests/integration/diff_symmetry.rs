use matchq::domain::report::Report;
use matchq::engine::diff::{byte_different, bytes_different, prefix_differences};

#[test]
fn reversed_operands_exchange_original_and_new() {
    let pairs: [(&[u8], &[u8]); 4] = [
        (&b""[..], &b"abc"[..]),
        (&b"ab"[..], &b"abcd"[..]),
        (&b"hello"[..], &b"hello world"[..]),
        (&[1, 2, 3][..], &[1, 2, 3][..]),
    ];

    for (short, long) in pairs {
        let forward = bytes_different(short, long).expect("forward diff");
        let backward = bytes_different(long, short).expect("backward diff");

        let swapped: Vec<Report> = backward
            .iter()
            .map(|report| Report {
                original: report.new,
                new: report.original,
                ..*report
            })
            .collect();
        assert_eq!(forward.into_vec(), swapped);
    }
}

#[test]
fn tail_reports_are_in_ascending_index_order() {
    let reports = bytes_different(b"ab", b"abcdef").expect("diff");
    let indexes: Vec<usize> = reports.iter().map(|report| report.index).collect();
    assert_eq!(indexes, vec![2, 3, 4, 5]);
    assert!(reports.iter().all(|report| report.original.is_none()));
}

#[test]
fn prefix_changes_are_separate_from_tail_reports() {
    let left = b"abcx";
    let right = b"abzxyz";
    let tail = bytes_different(left, right).expect("diff");
    let prefix = prefix_differences(left, right);

    assert_eq!(tail.len(), 2);
    assert_eq!(prefix.into_vec(), vec![Report::changed(2, b'c', b'z')]);
    assert_eq!(byte_different(b'c', b'z'), Some(Report::changed(0, b'c', b'z')));
}
