use nutrana_core::{
    challenge_percent, demo_dashboard, summarize, MealKind, MessageTier, Metric,
    NutritionSnapshot, SummaryError, WeeklyChallenge,
};

fn snapshot(calories_consumed: f64, calories_goal: f64) -> NutritionSnapshot {
    let mut nutrition = demo_dashboard().nutrition;
    nutrition.calories_consumed = calories_consumed;
    nutrition.calories_goal = calories_goal;
    nutrition.next_meal.meal_type = MealKind::from_key("lunch");
    nutrition
}

fn challenge(progress: u32, goal: u32) -> WeeklyChallenge {
    WeeklyChallenge {
        title: "5 porções de vegetais".to_string(),
        progress,
        goal,
        days_left: 3,
    }
}

#[test]
fn demo_snapshot_lands_in_good_job_tier() {
    let mut nutrition = snapshot(1200.0, 1500.0);
    nutrition.water_consumed_liters = 1.5;
    nutrition.water_goal_liters = 2.0;

    let report = summarize(&nutrition, &challenge(3, 5)).unwrap();
    assert_eq!(report.calories_percent, 80);
    assert_eq!(report.water_percent, 75);
    assert_eq!(report.challenge_percent, 60);
    assert_eq!(report.tier, MessageTier::GoodJob);
    assert_eq!(report.motivational_message, "Bom trabalho! Continue assim!");
    assert!(!report.motivational_message.contains("300"));
}

#[test]
fn near_goal_lands_in_almost_there_tier() {
    let report = summarize(&snapshot(1400.0, 1500.0), &challenge(3, 5)).unwrap();
    assert_eq!(report.calories_percent, 93);
    assert_eq!(report.tier, MessageTier::AlmostThere);
    assert_eq!(report.motivational_message, "Excelente! Você está quase lá!");
}

#[test]
fn low_progress_interpolates_remaining_calories() {
    let report = summarize(&snapshot(900.0, 1500.0), &challenge(3, 5)).unwrap();
    assert_eq!(report.calories_percent, 60);
    assert_eq!(
        report.tier,
        MessageTier::KeepGoing {
            remaining_calories: 600.0
        }
    );
    assert!(report.motivational_message.contains("600"));
}

#[test]
fn tier_boundaries_are_inclusive_at_ninety_and_seventy() {
    let at_90 = summarize(&snapshot(90.0, 100.0), &challenge(0, 5)).unwrap();
    assert_eq!(at_90.calories_percent, 90);
    assert_eq!(at_90.tier, MessageTier::AlmostThere);

    let at_89 = summarize(&snapshot(89.0, 100.0), &challenge(0, 5)).unwrap();
    assert_eq!(at_89.calories_percent, 89);
    assert_eq!(at_89.tier, MessageTier::GoodJob);

    let at_70 = summarize(&snapshot(70.0, 100.0), &challenge(0, 5)).unwrap();
    assert_eq!(at_70.tier, MessageTier::GoodJob);

    let at_69 = summarize(&snapshot(69.0, 100.0), &challenge(0, 5)).unwrap();
    assert_eq!(at_69.calories_percent, 69);
    assert_eq!(
        at_69.tier,
        MessageTier::KeepGoing {
            remaining_calories: 31.0
        }
    );
    assert!(at_69.motivational_message.contains("31 kcal"));
}

#[test]
fn calories_percent_is_monotonic_up_to_goal() {
    let goal = 1500.0;
    let mut previous = 0;
    for step in 0..=150 {
        let consumed = f64::from(step) * 10.0;
        let report = summarize(&snapshot(consumed, goal), &challenge(0, 5)).unwrap();
        assert!(report.calories_percent <= 100);
        assert!(report.calories_percent >= previous, "consumed={consumed}");
        previous = report.calories_percent;
    }
    assert_eq!(previous, 100);
}

#[test]
fn over_consumption_is_clamped_to_one_hundred() {
    for consumed in [1501.0, 2000.0, 1_000_000.0] {
        let report = summarize(&snapshot(consumed, 1500.0), &challenge(0, 5)).unwrap();
        assert_eq!(report.calories_percent, 100);
        assert_eq!(report.tier, MessageTier::AlmostThere);
    }

    let mut nutrition = snapshot(0.0, 1500.0);
    nutrition.water_consumed_liters = 3.5;
    nutrition.water_goal_liters = 2.0;
    let report = summarize(&nutrition, &challenge(0, 5)).unwrap();
    assert_eq!(report.water_percent, 100);
}

#[test]
fn water_percent_is_monotonic_up_to_goal() {
    let mut previous = 0;
    for step in 0..=20 {
        let mut nutrition = snapshot(0.0, 1500.0);
        nutrition.water_consumed_liters = f64::from(step) * 0.1;
        nutrition.water_goal_liters = 2.0;
        let report = summarize(&nutrition, &challenge(0, 5)).unwrap();
        assert!(report.water_percent >= previous);
        previous = report.water_percent;
    }
    assert_eq!(previous, 100);
}

#[test]
fn challenge_percent_is_not_clamped() {
    assert_eq!(challenge_percent(&challenge(6, 5)).unwrap(), 120);
    let report = summarize(&snapshot(100.0, 1500.0), &challenge(6, 5)).unwrap();
    assert_eq!(report.challenge_percent, 120);
}

#[test]
fn non_positive_goals_are_rejected() {
    let err = summarize(&snapshot(100.0, 0.0), &challenge(1, 5)).unwrap_err();
    assert_eq!(
        err,
        SummaryError::InvalidGoal {
            metric: Metric::Calories,
            value: 0.0
        }
    );

    let mut nutrition = snapshot(100.0, 1500.0);
    nutrition.water_goal_liters = -2.0;
    let err = summarize(&nutrition, &challenge(1, 5)).unwrap_err();
    assert!(matches!(
        err,
        SummaryError::InvalidGoal {
            metric: Metric::Water,
            ..
        }
    ));

    let err = summarize(&snapshot(100.0, 1500.0), &challenge(1, 0)).unwrap_err();
    assert!(err.to_string().contains("challenge goal"));
}

#[test]
fn summarize_is_pure() {
    let nutrition = snapshot(1234.0, 1500.0);
    let weekly = challenge(2, 7);
    let first = summarize(&nutrition, &weekly).unwrap();
    let second = summarize(&nutrition, &weekly).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn non_finite_consumed_values_are_rejected() {
    let err = summarize(&snapshot(f64::NAN, 1500.0), &challenge(1, 5)).unwrap_err();
    assert!(matches!(
        err,
        SummaryError::InvalidValue {
            metric: Metric::Calories,
            ..
        }
    ));
    assert!(!err.to_string().contains("kcal"));

    let mut nutrition = snapshot(100.0, 1500.0);
    nutrition.water_consumed_liters = f64::INFINITY;
    let err = summarize(&nutrition, &challenge(1, 5)).unwrap_err();
    assert!(err.to_string().contains("water value must be a finite number"));
}
