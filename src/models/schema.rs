use serde::{Deserialize, Serialize};

/// One food line in a meal: an amount in grams and the nutrients it carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealItem {
    pub name: String,
    pub amount_g: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
    pub kcal: f64,
}

impl MealItem {
    pub fn new(
        name: &str,
        amount_g: f64,
        protein_g: f64,
        fat_g: f64,
        carbs_g: f64,
        kcal: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            amount_g,
            protein_g,
            fat_g,
            carbs_g,
            kcal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub items: Vec<MealItem>,
}

impl Meal {
    pub fn new(name: &str, items: Vec<MealItem>) -> Self {
        Self {
            name: name.to_string(),
            items,
        }
    }

    /// Subtotal for this meal alone.
    pub fn totals(&self) -> Totals {
        Totals::sum(&self.items)
    }
}

/// Aggregate nutrients, always derived by summing items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
    pub kcal: f64,
}

impl Totals {
    pub fn sum<'a>(items: impl IntoIterator<Item = &'a MealItem>) -> Self {
        items.into_iter().fold(Totals::default(), |acc, item| Totals {
            protein_g: acc.protein_g + item.protein_g,
            fat_g: acc.fat_g + item.fat_g,
            carbs_g: acc.carbs_g + item.carbs_g,
            kcal: acc.kcal + item.kcal,
        })
    }
}

/// An ordered meal plan. Totals are never stored; see [`NutritionSchema::totals`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionSchema {
    pub meals: Vec<Meal>,
}

impl NutritionSchema {
    pub fn new(meals: Vec<Meal>) -> Self {
        Self { meals }
    }

    /// All items in meal order.
    pub fn items(&self) -> impl Iterator<Item = &MealItem> {
        self.meals.iter().flat_map(|m| m.items.iter())
    }

    pub fn item_count(&self) -> usize {
        self.meals.iter().map(|m| m.items.len()).sum()
    }

    pub fn totals(&self) -> Totals {
        Totals::sum(self.items())
    }

    /// Look up an item by meal and item name (case-insensitive).
    pub fn find_item(&self, meal: &str, item: &str) -> Option<&MealItem> {
        self.meals
            .iter()
            .find(|m| m.name.to_lowercase() == meal.to_lowercase())
            .and_then(|m| {
                m.items
                    .iter()
                    .find(|i| i.name.to_lowercase() == item.to_lowercase())
            })
    }
}
