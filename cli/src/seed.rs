use anyhow::{Context, Result};
use cookbook_client::{Client, RecipeDraft};

struct SeedRecipe {
    title: &'static str,
    description: &'static str,
    ingredients: &'static [&'static str],
    instructions: &'static [&'static str],
    comment: Option<&'static str>,
}

const SAMPLE_RECIPES: &[SeedRecipe] = &[
    SeedRecipe {
        title: "Classic Spaghetti Carbonara",
        description: "A rich and creamy Italian pasta dish with eggs, cheese, and pancetta.",
        ingredients: &[
            "400 g spaghetti",
            "200 g pancetta or guanciale",
            "4 large eggs",
            "100 g Pecorino Romano, freshly grated",
            "2 tsp black pepper, freshly ground",
            "Salt for the pasta water",
        ],
        instructions: &[
            "Bring a large pot of salted water to boil and cook spaghetti until al dente",
            "While pasta cooks, cut pancetta into small cubes and fry until crispy",
            "Whisk together eggs, grated Pecorino Romano, and black pepper",
            "Reserve a cup of pasta water, then drain",
            "Add hot pasta to the pancetta pan, off the heat",
            "Pour the egg mixture over the pasta and toss vigorously",
            "Loosen with pasta water as needed and serve immediately",
        ],
        comment: Some("The pasta-water trick makes all the difference."),
    },
    SeedRecipe {
        title: "Banana Bread",
        description: "Moist banana bread, perfect for using up overripe bananas.",
        ingredients: &[
            "3 large ripe bananas",
            "75 g melted butter",
            "150 g sugar",
            "1 egg",
            "1 tsp vanilla",
            "1 tsp baking soda",
            "Pinch of salt",
            "190 g flour",
        ],
        instructions: &[
            "Preheat oven to 175 C and grease a loaf pan",
            "Mash the bananas until smooth",
            "Mix in melted butter, then sugar, egg, and vanilla",
            "Stir in baking soda and salt, then fold in flour until just combined",
            "Pour into the pan and bake 55 to 65 minutes",
            "Cool in the pan for 10 minutes before turning out",
        ],
        comment: None,
    },
    SeedRecipe {
        title: "Chicken Tikka Masala",
        description: "Tender chicken in a creamy, spiced tomato sauce.",
        ingredients: &[
            "800 g boneless chicken thighs",
            "1 cup yogurt",
            "2 tbsp garam masala",
            "2 large onions, diced",
            "4 cloves garlic, minced",
            "400 g tomato puree",
            "1 cup heavy cream",
            "Cilantro for garnish",
        ],
        instructions: &[
            "Marinate chicken in yogurt and garam masala for at least 2 hours",
            "Grill the chicken until charred and cooked through",
            "Saute onions until golden, then add garlic",
            "Add tomato puree and cream and simmer 15 minutes",
            "Cut the chicken into pieces and simmer in the sauce 10 minutes",
            "Garnish with cilantro and serve with rice or naan",
        ],
        comment: Some("Doubled the garlic, no regrets."),
    },
];

/// Posts the sample recipes (and their comments) through the API, the same
/// way the web form would.
pub async fn seed(server: &str) -> Result<()> {
    let client = Client::new(server);

    for sample in SAMPLE_RECIPES {
        let draft = RecipeDraft {
            title: sample.title.to_string(),
            description: sample.description.to_string(),
            ingredients: sample.ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: sample.instructions.iter().map(|s| s.to_string()).collect(),
            image_url: None,
        };

        let recipe = client
            .create_recipe(&draft)
            .await
            .with_context(|| format!("failed to create {}", sample.title))?;

        if let Some(content) = sample.comment {
            client
                .add_comment(&recipe.id, content)
                .await
                .with_context(|| format!("failed to comment on {}", sample.title))?;
        }

        println!("created {}  {}", recipe.id, recipe.title);
    }

    Ok(())
}
