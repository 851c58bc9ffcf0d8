//! Named navigation targets.
//!
//! Core only emits route requests; parsing and rendering paths belong to the
//! presentation layer.

use log::info;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// Screen the presentation layer can be asked to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "route", content = "meal_id", rename_all = "snake_case")]
pub enum Route {
    /// Unauthenticated entry point.
    Home,
    Dashboard,
    MealPlan,
    Progress,
    PhysicalActivity,
    Achievements,
    Profile,
    Tips,
    Support,
    AddMeal,
    EditMeal(u32),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::MealPlan => "/meal-plan".to_string(),
            Self::Progress => "/progress".to_string(),
            Self::PhysicalActivity => "/physical-activity".to_string(),
            Self::Achievements => "/achievements".to_string(),
            Self::Profile => "/profile".to_string(),
            Self::Tips => "/tips".to_string(),
            Self::Support => "/support".to_string(),
            Self::AddMeal => "/add-meal".to_string(),
            Self::EditMeal(id) => format!("/edit-meal/{id}"),
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path().as_str())
    }
}

/// Navigation collaborator.
pub trait Navigator {
    fn navigate(&self, route: &Route);
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn navigate(&self, route: &Route) {
        (**self).navigate(route)
    }
}

impl<N: Navigator + ?Sized> Navigator for Rc<N> {
    fn navigate(&self, route: &Route) {
        (**self).navigate(route)
    }
}

/// Navigator for headless hosts (CLI, FFI smoke paths): records the request
/// in the log only.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, route: &Route) {
        info!("event=navigate module=navigation status=ok path={route}");
    }
}

/// Dashboard menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub route: Route,
    pub label: &'static str,
}

const MAIN_MENU: &[MenuItem] = &[
    MenuItem {
        route: Route::Dashboard,
        label: "Início",
    },
    MenuItem {
        route: Route::MealPlan,
        label: "Refeições",
    },
    MenuItem {
        route: Route::Progress,
        label: "Progresso",
    },
    MenuItem {
        route: Route::PhysicalActivity,
        label: "Atividades",
    },
    MenuItem {
        route: Route::Achievements,
        label: "Conquistas",
    },
    MenuItem {
        route: Route::Profile,
        label: "Perfil",
    },
];

/// Dashboard menu in display order.
pub fn main_menu() -> &'static [MenuItem] {
    MAIN_MENU
}
