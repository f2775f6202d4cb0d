use approx::assert_relative_eq;
use peer_motion::ground_motion::DEFAULT_SCALE_FACTOR;
use peer_motion::{GroundMotionRecord, MotionError, RecordField, RecordShape};

fn assert_all_zero(record: &GroundMotionRecord) {
    assert!(record.is_empty());
    assert_eq!(record.get_n_pts(), 0);
    assert_eq!(record.get_dt(), 0.0);
    assert_eq!(record.get_duration(), 0.0);
    assert_eq!(record.get_peak_factor(), 0.0);
    assert_eq!(record.get_factor(0.0), 0.0);
    assert_eq!(record.get_factor(1.0), 0.0);
}

#[test]
fn test_tagged_header_scenario() {
    let payload = "PEER RECORD ... NPTS= 4 ... DT= 0.0200 SEC...\n1.0 2.0 3.0 4.0";
    let record = GroundMotionRecord::from_payload(
        1,
        payload.as_bytes(),
        RecordShape::TaggedHeader,
        DEFAULT_SCALE_FACTOR,
    );

    assert_eq!(record.get_n_pts(), 4);
    assert_eq!(record.get_dt(), 0.02);
    assert_eq!(record.samples(), &[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(record.get_factor(0.01), 1.5);
    assert_eq!(record.get_factor(0.06), 0.0);
    assert_eq!(record.get_peak_factor(), 4.0);
    assert_eq!(record.get_duration(), 0.08);
}

#[test]
fn test_not_found_scenario() {
    let payload = "<html><title>Page Not Found</title></html>";
    let record = GroundMotionRecord::from_payload(
        2,
        payload.as_bytes(),
        RecordShape::TaggedHeader,
        DEFAULT_SCALE_FACTOR,
    );

    assert_eq!(record.failure(), Some(&MotionError::NotFound));
    assert_all_zero(&record);
}

#[test]
fn test_missing_npts_scenario() {
    let payload = "PEER RECORD\nDT= 0.0200 SEC\n1.0 2.0 3.0 4.0";
    let record = GroundMotionRecord::from_payload(
        3,
        payload.as_bytes(),
        RecordShape::TaggedHeader,
        DEFAULT_SCALE_FACTOR,
    );

    assert_eq!(
        record.failure(),
        Some(&MotionError::MissingField(RecordField::Npts))
    );
    assert_all_zero(&record);
}

#[test]
fn test_missing_dt() {
    let payload = "PEER RECORD\nNPTS= 4\n1.0 2.0 3.0 4.0";
    let record = GroundMotionRecord::from_payload(
        3,
        payload.as_bytes(),
        RecordShape::TaggedHeader,
        DEFAULT_SCALE_FACTOR,
    );

    assert_eq!(
        record.failure(),
        Some(&MotionError::MissingField(RecordField::Dt))
    );
    assert_all_zero(&record);
}

#[test]
fn test_columnar_scenario() {
    let payload = "line1\nline2\nline3\n3 0.01 extra\n0.5 -0.5 1.0\n";
    let record = GroundMotionRecord::from_payload(
        4,
        payload.as_bytes(),
        RecordShape::Columnar,
        DEFAULT_SCALE_FACTOR,
    );

    assert_eq!(record.get_n_pts(), 3);
    assert_eq!(record.get_dt(), 0.01);
    assert_eq!(record.samples(), &[0.5, -0.5, 1.0]);
    assert!(record.failure().is_none());
}

#[test]
fn test_truncated_and_empty_data() {
    let truncated = GroundMotionRecord::from_payload(
        5,
        b"NPTS= 5, DT= 0.01 SEC\n1.0 2.0 3.0\n",
        RecordShape::TaggedHeader,
        1.0,
    );
    assert_eq!(
        truncated.failure(),
        Some(&MotionError::Truncated {
            expected: 5,
            found: 3
        })
    );
    assert_all_zero(&truncated);

    let empty = GroundMotionRecord::from_payload(
        6,
        b"NPTS= 0, DT= 0.01 SEC\n",
        RecordShape::TaggedHeader,
        1.0,
    );
    assert_eq!(empty.failure(), Some(&MotionError::EmptyData));
    assert_all_zero(&empty);

    let blank =
        GroundMotionRecord::from_payload(7, b"", RecordShape::Columnar, DEFAULT_SCALE_FACTOR);
    assert_eq!(blank.failure(), Some(&MotionError::EmptyPayload));
    assert_all_zero(&blank);
}

#[test]
fn test_populated_record_properties() {
    let samples = vec![0.3, -1.2, 0.7, 2.4, -2.9, 0.0, 1.1];
    let dt = 0.005;
    let factor = 1.7;
    let record = GroundMotionRecord::from_samples(0, samples.clone(), dt, factor);

    assert_eq!(record.get_n_pts(), samples.len());
    assert_eq!(
        record.get_duration(),
        record.get_n_pts() as f64 * record.get_dt()
    );
    assert_eq!(record.get_peak_factor(), factor * 2.9);

    let last = (samples.len() - 1) as f64 * dt;
    let mut t = 0.0;
    while t < last {
        let incr = t / dt;
        let i = incr.floor() as usize;
        if i + 1 < samples.len() {
            let expected = factor * (samples[i] + (samples[i + 1] - samples[i]) * (incr - i as f64));
            assert_relative_eq!(record.get_factor(t), expected, epsilon = 1e-12);
        }
        t += 0.0013;
    }
}

#[test]
fn test_boundaries() {
    let samples = vec![1.0, -1.0, 2.0, -2.0];
    let dt = 0.25;
    let record = GroundMotionRecord::from_samples(0, samples, dt, 3.0);

    for t in [-1e-12, -0.25, -100.0] {
        assert_eq!(record.get_factor(t), 0.0);
    }
    // at the last sample and beyond: no hold, no extrapolation
    for t in [0.75, 0.8, 1.0, 10.0] {
        assert_eq!(record.get_factor(t), 0.0);
    }
    assert_eq!(record.get_factor(0.0), 3.0);
    assert_relative_eq!(record.get_factor(0.7), 3.0 * (2.0 - 4.0 * 0.8), epsilon = 1e-12);
}

#[test]
fn test_from_samples_round_trip() {
    let samples = vec![0.25, -0.75, 0.5];
    let record = GroundMotionRecord::from_samples(11, samples.clone(), 0.01, 4.0);

    assert_eq!(record.get_dt(), 0.01);
    assert_eq!(record.get_n_pts(), samples.len());
    assert_eq!(record.get_peak_factor(), 4.0 * 0.75);
    assert_eq!(record.samples(), samples.as_slice());
}
