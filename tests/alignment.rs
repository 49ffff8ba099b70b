use pairwise_aligner::{
    align_global, align_local, score_alignment, Aligner, AlignerConfig, AlignerError,
    AlignmentMode, Position, Sequence, SimpleScoring, SubstitutionMatrix, GAP_SYMBOL,
};

const X: &str = "HEAGAWGHEE";
const Y: &str = "PAWHEAE";

#[test]
fn textbook_global_alignment() {
    let result = align_global(X, Y, &SubstitutionMatrix::blosum50()).unwrap();
    assert_eq!(
        result.aligned_strings(),
        ("HEAGAWGHE-E".to_string(), "--P-AW-HEAE".to_string())
    );
    assert_eq!(result.score, 1);
}

#[test]
fn textbook_local_alignment() {
    let local = align_local(X, Y, &SubstitutionMatrix::blosum50()).unwrap();
    assert_eq!(
        local.alignment.aligned_strings(),
        ("AWGHE".to_string(), "AW-HE".to_string())
    );
    assert_eq!(local.score(), 28);
    assert_eq!(local.matrix.rows(), Y.len() + 1);
    assert_eq!(local.matrix.cols(), X.len() + 1);
    assert_eq!(local.matrix.max_position(), Some((Position::new(9, 5), 28)));
}

#[test]
fn swapped_inputs_mirror_the_alignment() {
    let blosum50 = SubstitutionMatrix::blosum50();
    let result = align_global(Y, X, &blosum50).unwrap();
    assert_eq!(result.aligned_x, b"--P-AW-HEAE");
    assert_eq!(result.aligned_y, b"HEAGAWGHE-E");

    let local = align_local(Y, X, &blosum50).unwrap();
    assert_eq!(local.alignment.aligned_x, b"AW-HE");
    assert_eq!(local.alignment.aligned_y, b"AWGHE");
}

#[test]
fn smaller_gap_penalty_changes_local_segment() {
    let scoring = SubstitutionMatrix::blosum50().with_gap_penalty(-4);
    let global = align_global(X, Y, &scoring).unwrap();
    assert_eq!(global.score, 21);
    assert_eq!(global.aligned_x, b"HEAGAWGHE-E");

    let local = align_local(X, Y, &scoring).unwrap();
    assert_eq!(local.alignment.aligned_x, b"AWGHE-E");
    assert_eq!(local.alignment.aligned_y, b"AW-HEAE");
    assert_eq!(local.score(), 34);
}

#[test]
fn empty_inputs() {
    let blosum50 = SubstitutionMatrix::blosum50();

    let result = align_global("", Y, &blosum50).unwrap();
    assert_eq!(result.aligned_x, vec![GAP_SYMBOL; Y.len()]);
    assert_eq!(result.aligned_y, Y.as_bytes());
    assert_eq!(result.score, Y.len() as i32 * -8);

    let result = align_global(X, "", &blosum50).unwrap();
    assert_eq!(result.aligned_x, X.as_bytes());
    assert_eq!(result.aligned_y, vec![GAP_SYMBOL; X.len()]);
    assert_eq!(result.score, -80);

    let result = align_global("", "", &blosum50).unwrap();
    assert!(result.is_empty());
    assert_eq!(result.score, 0);

    for (x, y) in [("", Y), (X, ""), ("", "")] {
        let local = align_local(x, y, &blosum50).unwrap();
        assert!(local.alignment.aligned_x.is_empty());
        assert!(local.alignment.aligned_y.is_empty());
        assert_eq!(local.score(), 0);
    }
}

#[test]
fn errors() {
    let blosum50 = SubstitutionMatrix::blosum50();
    assert_eq!(
        align_local("heag", "PAW", &blosum50).unwrap_err(),
        AlignerError::UndefinedScore { a: 'h', b: 'P' }
    );
    assert!(matches!(
        align_global("HE-AG", Y, &blosum50),
        Err(AlignerError::InvalidInput(_))
    ));
    assert_eq!(
        align_global(X, Y, &blosum50.clone().with_gap_penalty(1)).unwrap_err(),
        AlignerError::InvalidGapPenalty(1)
    );
}

#[test]
fn rescored_local_alignment_matches_matrix() {
    let blosum50 = SubstitutionMatrix::blosum50();
    let local = align_local("MEANLYPRTEINSTRING", "PLEASANTLYEINSTEIN", &blosum50).unwrap();
    let rescored = score_alignment(
        &local.alignment.aligned_x,
        &local.alignment.aligned_y,
        &blosum50,
        GAP_SYMBOL,
    )
    .unwrap();
    assert_eq!(rescored, local.score());
    assert_eq!(local.matrix.max_position().unwrap().1, local.score());
}

#[test]
fn aligner_accepts_sequences_and_modes() {
    let aligner = Aligner::new(SimpleScoring::new(2, -1, -2))
        .with_config(AlignerConfig::new().with_gap_symbol(b'_'));
    let x = Sequence::from("ACGTTGCA");
    let y = Sequence::from("ACGTGCA");

    let global = aligner.align(AlignmentMode::Global, &x, &y).unwrap();
    assert_eq!(global.aligned_x.len(), global.aligned_y.len());
    assert_eq!(Sequence::from_aligned(&global.aligned_x, b'_'), x);
    assert_eq!(Sequence::from_aligned(&global.aligned_y, b'_'), y);
    assert_eq!(global.score, 12);
    assert_eq!(global.stats().gaps, 1);

    let local = aligner.local(&x, &y).unwrap();
    assert_eq!(local.score(), 12);
    assert_eq!(aligner.config().gap_symbol, b'_');
}
