use proptest::prelude::*;
use rcas_lib::{
    Cell, Config, Dimension, ErrorKind, InitialCondition, Neighborhood, Space, State, Status,
    Time, Universe,
};
use std::error::Error;

#[test]
fn default() -> Result<(), Box<dyn Error>> {
    let mut universe = Config::default().universe()?;
    assert_eq!(universe.run_to_completion()?, 100 * 100);
    assert_eq!(universe.status(), Status::Completed);
    assert_eq!(universe.space().history().len(), 99);
    Ok(())
}

#[test]
fn rule_30() -> Result<(), Box<dyn Error>> {
    let mut universe = Config::new(30, 7, 3).universe()?;
    universe.run_to_completion()?;
    let space = universe.space();
    assert_eq!(space.initial().values(), vec![0, 0, 0, 1, 0, 0, 0]);
    let history: Vec<Vec<i64>> = space.history().iter().map(|g| g.values()).collect();
    assert_eq!(
        history,
        vec![vec![0, 0, 1, 1, 1, 0, 0], vec![0, 1, 1, 0, 0, 1, 0]]
    );
    assert_eq!(space.current().values(), vec![1, 1, 0, 1, 1, 1, 1]);
    Ok(())
}

#[test]
fn step_generation() -> Result<(), Box<dyn Error>> {
    let mut universe = Config::new(30, 7, 3).universe()?;
    universe.step_generation()?;
    assert!(universe.space().is_complete());
    assert_eq!(universe.space().current().values(), vec![0, 0, 1, 1, 1, 0, 0]);
    assert_eq!(universe.time().to_string(), "(1; 0)");
    universe.step()?;
    assert_eq!(universe.space().history().len(), 1);
    assert_eq!(universe.space().current().len(), 1);
    Ok(())
}

#[test]
fn time_limit_reached() -> Result<(), Box<dyn Error>> {
    let mut universe = Config::new(110, 5, 2).universe()?;
    assert_eq!(universe.run_to_completion()?, 10);
    let current = universe.space().current().clone();
    let err = universe.step().unwrap_err();
    assert!(err.is_time_limit_reached());
    assert_eq!(universe.space().current(), &current);
    assert_eq!(universe.space().events().cells, 10);
    assert_eq!(universe.run_to_completion()?, 0);
    Ok(())
}

#[test]
fn no_history() -> Result<(), Box<dyn Error>> {
    let config = Config::new(30, 7, 3).set_keep_history(false);
    let mut universe = config.universe()?;
    universe.run_to_completion()?;
    assert!(universe.space().history().is_empty());
    assert_eq!(universe.space().current().values(), vec![1, 1, 0, 1, 1, 1, 1]);
    Ok(())
}

#[test]
fn unlimited() -> Result<(), Box<dyn Error>> {
    let config = Config::new(90, 8, 1).set_iterations(None);
    let mut universe = config.universe()?;
    let steps = universe.run_while(|u| u.time().absolute() < 5)?;
    assert_eq!(steps, 5 * 8);
    assert_eq!(universe.status(), Status::Running);
    assert_eq!(universe.space().history().len(), 4);
    Ok(())
}

#[test]
fn invalid_configs() {
    let kind = |config: Config| config.universe().unwrap_err().kind();
    assert_eq!(
        kind(Config::default().set_rule_number(256)),
        ErrorKind::InvalidRuleNumber
    );
    assert_eq!(
        kind(Config::default().set_cells(0)),
        ErrorKind::InvalidInitialCondition
    );
    assert_eq!(
        kind(Config::default().set_iterations(0)),
        ErrorKind::InvalidAbsoluteTimeLimit
    );
    assert_eq!(
        kind(Config::new(30, 3, 3).set_initial(InitialCondition::Explicit(vec![0, 1]))),
        ErrorKind::InvalidInitialCondition
    );
    assert_eq!(
        kind(Config::new(30, 3, 3).set_initial(InitialCondition::Explicit(vec![0, 1, 2]))),
        ErrorKind::InvalidInitialCondition
    );
}

#[test]
fn initial_conditions() -> Result<(), Box<dyn Error>> {
    let explicit = Config::new(30, 4, 1)
        .set_initial(InitialCondition::Explicit(vec![1, 0, 0, 1]))
        .universe()?;
    assert_eq!(explicit.space().initial().values(), vec![1, 0, 0, 1]);

    let random = |seed| {
        Config::new(30, 64, 1)
            .set_initial(InitialCondition::Random { seed: Some(seed) })
            .universe()
            .map(|u| u.space().initial().values())
    };
    assert_eq!(random(7)?, random(7)?);
    assert_eq!(random(7)?.len(), 64);
    Ok(())
}

#[test]
fn config_from_json() -> Result<(), Box<dyn Error>> {
    let config: Config = serde_json::from_str(
        r#"{ "rule_number": 90, "cells": 9, "iterations": 4, "keep_history": false }"#,
    )?;
    assert_eq!(config, Config::new(90, 9, 4).set_keep_history(false));
    let config: Config = serde_json::from_str(r#"{ "initial": { "Random": { "seed": 1 } } }"#)?;
    assert_eq!(config.initial, InitialCondition::Random { seed: Some(1) });
    assert_eq!(config.rule_number, 30);
    Ok(())
}

#[test]
fn mismatched_space() -> Result<(), Box<dyn Error>> {
    let cell = Cell::new(State::dead(), rcas_lib::rules::elementary::rule_table(30)?)?;
    let time = Time::dimensional(Some(2), &[3])?;
    let space = Space::new(&time, Dimension::row([cell.clone(), cell.clone(), cell]), true)?;
    let err = Universe::new(Time::dimensional(Some(2), &[4])?, space).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidDimensionalAmount);
    Ok(())
}

#[test]
fn incomplete_rule_table() -> Result<(), Box<dyn Error>> {
    let rules = rcas_lib::rules::elementary::rule_table(30)?
        .into_iter()
        .skip(1)
        .collect();
    let cell = Cell::new(State::alive(), rules)?;
    let time = Time::dimensional(None, &[3])?;
    let initial = Dimension::row(vec![cell; 3]);
    let mut universe = Universe::with_initial(time, initial, true, Neighborhood::elementary())?;
    let err = universe.run_to_completion().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnmatchedCombination);
    let space = universe.space();
    assert_eq!(space.events().cells, 0);
    assert_eq!(space.events().iterations, 0);
    assert!(space.current().is_empty());
    assert!(space.history().is_empty());
    assert_eq!(universe.time().position(), vec![0]);
    assert_eq!(universe.status(), Status::Running);
    Ok(())
}

proptest! {
    #[test]
    fn history_counts(rule in 0u16..256, cells in 1i64..8, iterations in 1i64..12, keep in any::<bool>()) {
        let config = Config::new(rule, cells, iterations).set_keep_history(keep);
        let mut universe = config.universe().unwrap();
        let steps = universe.run_to_completion().unwrap();
        prop_assert_eq!(steps, (cells * iterations) as u64);
        let space = universe.space();
        let expected = if keep { iterations as usize - 1 } else { 0 };
        prop_assert_eq!(space.history().len(), expected);
        prop_assert_eq!(space.events().iterations, iterations as u64 - 1);
        prop_assert_eq!(space.current().len(), cells as usize);
    }
}
