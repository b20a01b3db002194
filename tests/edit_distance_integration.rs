use algo_drills::problems::edit_distance::{edit_distance, edit_distance_str, edit_matrix, EditOp};

#[test]
fn classic_pairs() {
    assert_eq!(edit_distance(b"kitten", b"sitting"), 3);
    assert_eq!(edit_distance(b"horse", b"ros"), 3);
    assert_eq!(edit_distance(b"intention", b"execution"), 5);
    assert_eq!(edit_distance(b"", b"abc"), 3);
    assert_eq!(edit_distance(b"abc", b""), 3);
    assert_eq!(edit_distance::<u8>(b"", b""), 0);
    assert_eq!(edit_distance(b"same", b"same"), 0);
}

#[test]
fn works_over_any_comparable_elements() {
    let a = [1u32, 2, 3, 4];
    let b = [1u32, 3, 4, 5];
    assert_eq!(edit_distance(&a, &b), 2);
    assert_eq!(edit_distance_str("café", "cafe"), 1);
    assert_eq!(edit_distance_str("naïve", "naive"), 1);
}

#[test]
fn script_replays_to_target() {
    let a = b"intention";
    let b = b"execution";
    let matrix = edit_matrix(a, b);
    assert_eq!(matrix.distance(), 5);
    assert_eq!(matrix.rows().len(), a.len() + 1);
    assert!(matrix.rows().iter().all(|row| row.len() == b.len() + 1));

    let script = matrix.script();
    let cost: usize = script.iter().map(EditOp::cost).sum();
    assert_eq!(cost, 5);

    let mut source = Vec::new();
    let mut target = Vec::new();
    for op in &script {
        match *op {
            EditOp::Keep(c) => {
                source.push(c);
                target.push(c);
            }
            EditOp::Substitute { from, to } => {
                source.push(from);
                target.push(to);
            }
            EditOp::Insert(c) => target.push(c),
            EditOp::Delete(c) => source.push(c),
        }
    }
    assert_eq!(source, a.to_vec());
    assert_eq!(target, b.to_vec());
}

#[test]
fn matrix_borders() {
    let matrix = edit_matrix(b"abc", b"de");
    let rows = matrix.rows();
    assert_eq!(rows[0], vec![0, 1, 2]);
    assert_eq!(rows.iter().map(|r| r[0]).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
}
