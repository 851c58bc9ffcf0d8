use nutrana_core::{
    demo_dashboard, demo_meal_plan, main_menu, DashboardSnapshot, MealKind, MealPlan,
    MealPlanError, MealTime, MealType, Route, DEFAULT_INGREDIENT_PREVIEW,
};

#[test]
fn register_marks_meal_and_updates_totals() {
    let mut plan = demo_meal_plan();
    assert_eq!(plan.registered_calories(), 320 + 180);
    assert_eq!(plan.planned_calories(), 320 + 450 + 180 + 280);

    let meal = plan.register(2).expect("lunch registration");
    assert!(meal.registered);
    assert_eq!(meal.meal_type, MealKind::Known(MealType::Lunch));
    assert_eq!(plan.registered_calories(), 320 + 450 + 180);
}

#[test]
fn register_rejects_unknown_and_repeated_meals() {
    let mut plan = demo_meal_plan();
    assert_eq!(plan.register(99).unwrap_err(), MealPlanError::MealNotFound(99));
    assert_eq!(plan.register(1).unwrap_err(), MealPlanError::AlreadyRegistered(1));
}

#[test]
fn upcoming_meals_are_not_registrable_from_today() {
    let mut plan = demo_meal_plan();
    assert!(plan.has_upcoming());
    assert!(plan.find(5).is_some());
    assert_eq!(plan.register(5).unwrap_err(), MealPlanError::MealNotFound(5));
}

#[test]
fn ingredient_preview_reports_overflow() {
    let plan = demo_meal_plan();
    let lunch = plan.find(2).expect("lunch");
    let preview = lunch.ingredient_preview(DEFAULT_INGREDIENT_PREVIEW);
    assert_eq!(preview.shown, ["Quinoa", "Frango", "Tomate"]);
    assert_eq!(preview.overflow, 2);

    let snack = plan.find(3).expect("snack");
    let preview = snack.ingredient_preview(DEFAULT_INGREDIENT_PREVIEW);
    assert_eq!(preview.shown.len(), 3);
    assert_eq!(preview.overflow, 0);
}

#[test]
fn empty_plan_has_no_upcoming_section() {
    let plan = MealPlan::default();
    assert!(!plan.has_upcoming());
    assert_eq!(plan.registered_calories(), 0);
}

#[test]
fn meal_plan_json_uses_padded_times_and_raw_meal_keys() {
    let plan = demo_meal_plan();
    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["today"][0]["time"], "08:30");
    assert_eq!(json["today"][0]["meal_type"], "breakfast");

    let decoded: MealPlan = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, plan);
}

#[test]
fn meal_plan_json_rejects_invalid_time() {
    let value = serde_json::json!({
        "today": [{
            "id": 1,
            "meal_type": "lunch",
            "name": "Sopa",
            "time": "25:00",
            "calories": 200,
            "registered": false
        }]
    });
    let err = serde_json::from_value::<MealPlan>(value).unwrap_err();
    assert!(err.to_string().contains("HH:MM"), "unexpected error: {err}");
}

#[test]
fn dashboard_snapshot_accepts_minimal_json() {
    let value = serde_json::json!({
        "nutrition": {
            "calories_consumed": 900.0,
            "calories_goal": 1500.0,
            "water_consumed_liters": 0.5,
            "water_goal_liters": 2.0,
            "macros": { "protein_grams": 10.0, "carbs_grams": 20.0, "fats_grams": 5.0 },
            "next_meal": { "name": "Jantar", "time_of_day": "20:00", "meal_type": "dinner" },
            "burned_calories": 0.0
        },
        "weekly_challenge": { "title": "Água", "progress": 1, "goal": 7, "days_left": 6 }
    });
    let snapshot: DashboardSnapshot = serde_json::from_value(value).unwrap();
    assert!(snapshot.meals.is_empty());
    assert_eq!(
        snapshot.nutrition.next_meal.meal_type,
        MealKind::Known(MealType::Dinner)
    );
}

#[test]
fn demo_dashboard_meal_labels_follow_registration() {
    let labels: Vec<String> = demo_dashboard()
        .meals
        .iter()
        .map(|meal| meal.calories_label())
        .collect();
    assert_eq!(labels, vec!["320 kcal", "--", "150 kcal", "--"]);
}

#[test]
fn meal_routes_and_menu_match_screen_paths() {
    assert_eq!(Route::MealPlan.path(), "/meal-plan");
    assert_eq!(Route::AddMeal.path(), "/add-meal");
    assert_eq!(Route::EditMeal(5).path(), "/edit-meal/5");
    let labels: Vec<&str> = main_menu().iter().map(|item| item.label).collect();
    assert_eq!(
        labels,
        vec!["Início", "Refeições", "Progresso", "Atividades", "Conquistas", "Perfil"]
    );
    assert_eq!(MealTime::parse("20:00").unwrap().to_string(), "20:00");
}
