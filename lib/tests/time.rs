use proptest::prelude::*;
use rcas_lib::{ErrorKind, Time, TimeShape};
use std::error::Error;

#[test]
fn unlimited() -> Result<(), Box<dyn Error>> {
    let mut time = Time::unlimited();
    assert_eq!(time.absolute(), 0);
    assert!(time.relative().is_none());
    for _ in 0..1000 {
        time.increase()?;
    }
    assert_eq!(time.absolute(), 1000);
    assert!(!time.is_exhausted());
    Ok(())
}

#[test]
fn unlimited_reset() -> Result<(), Box<dyn Error>> {
    let mut time = Time::unlimited();
    for _ in 0..1000 {
        time.increase()?;
    }
    time.reset();
    assert_eq!(time.absolute(), 0);
    time.increase()?;
    assert_eq!(time.absolute(), 1);
    assert!(time.relative().is_none());
    Ok(())
}

#[test]
fn limited() -> Result<(), Box<dyn Error>> {
    let time = Time::limited(10)?;
    assert_eq!(time.absolute(), 0);
    assert_eq!(time.limit(), Some(10));
    assert!(time.relative().is_none());
    Ok(())
}

#[test]
fn limited_non_positive() {
    for limit in [0, -1] {
        let err = Time::limited(limit).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidAbsoluteTimeLimit);
    }
}

#[test]
fn limited_beyond() -> Result<(), Box<dyn Error>> {
    let mut time = Time::limited(1000)?;
    for _ in 0..1000 {
        time.increase()?;
    }
    assert!(time.is_exhausted());
    let err = time.increase().unwrap_err();
    assert!(err.is_time_limit_reached());
    assert_eq!(time.absolute(), 1000);
    Ok(())
}

#[test]
fn limited_reset() -> Result<(), Box<dyn Error>> {
    let mut time = Time::limited(3)?;
    for _ in 0..3 {
        time.increase()?;
    }
    time.reset();
    assert_eq!(time.limit(), Some(3));
    for _ in 0..3 {
        time.increase()?;
    }
    assert!(time.increase().is_err());
    Ok(())
}

#[test]
fn dimensional() -> Result<(), Box<dyn Error>> {
    let time = Time::dimensional(Some(1000), &[1000])?;
    assert_eq!(time.absolute(), 0);
    assert_eq!(time.dimensions(), 1);
    let relative = time.relative().ok_or("no relative time")?;
    assert_eq!(relative.len(), 1);
    assert_eq!(relative[0].limit(), Some(1000));
    assert!(relative[0].relative().is_none());
    assert_eq!(time.shape(), vec![1000]);
    Ok(())
}

#[test]
fn dimensional_carry() -> Result<(), Box<dyn Error>> {
    let mut time = Time::dimensional(Some(3), &[2])?;
    let mut visited = vec![(time.absolute(), time.position())];
    while time.increase().is_ok() {
        visited.push((time.absolute(), time.position()));
    }
    assert_eq!(
        visited,
        vec![
            (0, vec![0]),
            (0, vec![1]),
            (1, vec![0]),
            (1, vec![1]),
            (2, vec![0]),
            (2, vec![1]),
            (3, vec![0]),
        ]
    );
    assert!(time.is_exhausted());
    assert_eq!(time.to_string(), "(3; 0)");
    Ok(())
}

#[test]
fn dimensional_carry_nested() -> Result<(), Box<dyn Error>> {
    let mut time = Time::dimensional(None, &[2, 3])?;
    for _ in 0..2 {
        time.increase()?;
    }
    assert_eq!((time.absolute(), time.position()), (0, vec![0, 2]));
    assert!(!time.at_generation_end());
    for _ in 0..3 {
        time.increase()?;
    }
    assert_eq!((time.absolute(), time.position()), (0, vec![1, 2]));
    assert!(time.at_generation_end());
    time.increase()?;
    assert_eq!((time.absolute(), time.position()), (1, vec![0, 0]));
    assert!(time.at_generation_start());
    Ok(())
}

#[test]
fn dimensional_exhausted_unchanged() -> Result<(), Box<dyn Error>> {
    let mut time = Time::dimensional(Some(1), &[2])?;
    time.increase()?;
    time.increase()?;
    let before = time.clone();
    assert!(time.increase().unwrap_err().is_time_limit_reached());
    assert_eq!(time, before);
    Ok(())
}

#[test]
fn invalid_shapes() {
    let kind = |shape: TimeShape| Time::from_shape(&shape).unwrap_err().kind();
    assert_eq!(
        kind(TimeShape::Nested {
            limit: Some(0),
            relative: vec![TimeShape::Limited(2)],
        }),
        ErrorKind::InvalidAbsoluteTimeLimit
    );
    assert_eq!(
        kind(TimeShape::Nested {
            limit: None,
            relative: vec![TimeShape::Limited(0)],
        }),
        ErrorKind::InvalidRelativeTimeLimit
    );
    assert_eq!(
        kind(TimeShape::Nested {
            limit: None,
            relative: vec![TimeShape::Unlimited],
        }),
        ErrorKind::InvalidRelativeTimeClass
    );
    assert_eq!(
        kind(TimeShape::Nested {
            limit: None,
            relative: vec![TimeShape::Nested {
                limit: Some(2),
                relative: vec![TimeShape::Limited(2)],
            }],
        }),
        ErrorKind::InvalidRelativeTimeClass
    );
    assert_eq!(
        kind(TimeShape::Nested {
            limit: None,
            relative: Vec::new(),
        }),
        ErrorKind::InvalidRelativeTimeClass
    );
}

proptest! {
    #[test]
    fn bounded_time_increases_exactly_limit_times(limit in 1i64..500) {
        let mut time = Time::limited(limit).unwrap();
        for _ in 0..limit {
            prop_assert!(time.increase().is_ok());
        }
        prop_assert!(time.increase().is_err());
        prop_assert_eq!(time.absolute(), limit as u64);
    }

    #[test]
    fn dimensional_time_visits_every_position(limit in 1i64..6, width in 1i64..6, height in 1i64..6) {
        let mut time = Time::dimensional(Some(limit), &[height, width]).unwrap();
        let mut increases = 0;
        while time.increase().is_ok() {
            increases += 1;
        }
        prop_assert_eq!(increases, limit * width * height);
        prop_assert_eq!(time.position(), vec![0, 0]);
    }
}
