//! Behavioural tests for example-data crate.
//!
//! These tests validate the crate's behaviour against Gherkin scenarios
//! covering registry parsing, deterministic generation, and recipe bounds.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::collections::HashSet;

use example_data::{
    ExampleDataSet, RegistryError, SeedDefinition, SeedRegistry, generate_example_data,
    is_valid_recipe_seed,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

// ============================================================================
// Test fixtures and constants
// ============================================================================

/// Base valid registry JSON used by multiple Given steps.
const VALID_REGISTRY_JSON: &str = r#"{
    "version": 1,
    "tags": ["dinner", "dessert", "vegetarian", "quick"],
    "seeds": [
        {"name": "test-seed", "seed": 42, "recipeCount": 8}
    ]
}"#;

/// Test world holding the parsed registry and generated data.
#[derive(Default, ScenarioState)]
struct World {
    json_input: Slot<String>,
    registry_result: Slot<Result<SeedRegistry, RegistryError>>,
    seed_def: Slot<SeedDefinition>,
    generated: Slot<ExampleDataSet>,
    second_generation: Slot<ExampleDataSet>,
}

impl World {
    /// Extracts the valid registry from the world state.
    fn registry(&self) -> SeedRegistry {
        self.registry_result
            .get()
            .expect("registry should be set")
            .expect("registry should be valid")
    }

    /// Extracts the seed definition from the world state.
    fn seed_def(&self) -> SeedDefinition {
        self.seed_def.get().expect("seed definition should be set")
    }

    /// Extracts the registry result (Ok or Err) from the world state.
    fn registry_result(&self) -> Result<SeedRegistry, RegistryError> {
        self.registry_result
            .get()
            .expect("registry result should be set")
    }

    /// Extracts the generated data set from the world state.
    fn data(&self) -> ExampleDataSet {
        self.generated.get().expect("recipes should be generated")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a valid seed registry JSON")]
fn a_valid_seed_registry_json(world: &World) {
    world.json_input.set(VALID_REGISTRY_JSON.to_owned());
}

#[given("a valid seed registry")]
fn a_valid_seed_registry(world: &World) {
    let registry = SeedRegistry::from_json(VALID_REGISTRY_JSON).expect("valid test registry");
    world.registry_result.set(Ok(registry));
}

#[given("a seed definition with seed {seed:u64}")]
fn a_seed_definition_with_seed(world: &World, seed: u64) {
    let registry = world.registry();
    let seed_def = registry.find_seed("test-seed").expect("seed exists");
    assert_eq!(seed_def.seed(), seed, "seed value mismatch");
    world.seed_def.set(seed_def.clone());
}

#[given("a seed definition")]
fn a_seed_definition(world: &World) {
    let registry = world.registry();
    let seed_def = registry.find_seed("test-seed").expect("seed exists");
    world.seed_def.set(seed_def.clone());
}

#[given("malformed JSON")]
fn malformed_json(world: &World) {
    world.json_input.set("not valid json".to_owned());
}

#[given("registry JSON with empty seeds array")]
fn registry_json_with_empty_seeds_array(world: &World) {
    let json = r#"{
        "version": 1,
        "tags": ["dinner"],
        "seeds": []
    }"#;
    world.json_input.set(json.to_owned());
}

#[given("registry JSON with a blank tag")]
fn registry_json_with_a_blank_tag(world: &World) {
    let json = r#"{
        "version": 1,
        "tags": ["dinner", ""],
        "seeds": [{"name": "test", "seed": 1, "recipeCount": 1}]
    }"#;
    world.json_input.set(json.to_owned());
}

// ============================================================================
// When steps
// ============================================================================

#[when("the registry is parsed")]
fn the_registry_is_parsed(world: &World) {
    let json_opt = world.json_input.get();
    let json = json_opt.expect("JSON input should be set");
    let result = SeedRegistry::from_json(&json);
    world.registry_result.set(result);
}

#[when("recipes are generated")]
fn recipes_are_generated(world: &World) {
    let registry = world.registry();
    let seed_def = world.seed_def();
    let data = generate_example_data(&registry, &seed_def).expect("generation succeeds");
    world.generated.set(data);
}

#[when("recipes are generated twice")]
fn recipes_are_generated_twice(world: &World) {
    let registry = world.registry();
    let seed_def = world.seed_def();

    let first = generate_example_data(&registry, &seed_def).expect("first generation");
    let second = generate_example_data(&registry, &seed_def).expect("second generation");

    world.generated.set(first);
    world.second_generation.set(second);
}

// ============================================================================
// Then steps
// ============================================================================

#[then("parsing succeeds")]
fn parsing_succeeds(world: &World) {
    let result = world.registry_result();
    assert!(result.is_ok(), "Expected parsing to succeed: {result:?}");
}

#[then("the registry contains the expected seed definitions")]
fn the_registry_contains_the_expected_seed_definitions(world: &World) {
    let registry = world.registry();
    assert_eq!(registry.seeds().len(), 1);
    let seed = registry.find_seed("test-seed").expect("seed should exist");
    assert_eq!(seed.name(), "test-seed");
    assert_eq!(seed.seed(), 42);
    assert_eq!(seed.recipe_count(), 8);
}

#[then("both generations produce identical recipes")]
fn both_generations_produce_identical_recipes(world: &World) {
    let first_opt = world.generated.get();
    let first = first_opt.expect("first generation should be set");
    let second_opt = world.second_generation.get();
    let second = second_opt.expect("second generation should be set");

    assert_eq!(first, second, "Generations should be deterministic");
}

#[then("every recipe satisfies the recipe bounds")]
fn every_recipe_satisfies_the_recipe_bounds(world: &World) {
    for recipe in world.data().recipes {
        assert!(
            is_valid_recipe_seed(&recipe),
            "Recipe out of bounds: {}",
            recipe.name
        );
    }
}

#[then("all tags exist in the registry")]
fn all_tags_exist_in_the_registry(world: &World) {
    let registry = world.registry();
    let registry_tags: HashSet<_> = registry.tags().iter().collect();

    for recipe in world.data().recipes {
        for tag in &recipe.tags {
            assert!(registry_tags.contains(tag), "Tag {tag} not in registry");
        }
    }
}

#[then("parsing fails with a parse error")]
fn parsing_fails_with_a_parse_error(world: &World) {
    match world.registry_result() {
        Err(RegistryError::ParseError { .. }) => {}
        other => panic!("Expected ParseError, got: {other:?}"),
    }
}

#[then("parsing fails with empty seeds error")]
fn parsing_fails_with_empty_seeds_error(world: &World) {
    match world.registry_result() {
        Err(RegistryError::EmptySeeds) => {}
        other => panic!("Expected EmptySeeds, got: {other:?}"),
    }
}

#[then("parsing fails with invalid tag error")]
fn parsing_fails_with_invalid_tag_error(world: &World) {
    match world.registry_result() {
        Err(RegistryError::InvalidTag { index: 1, .. }) => {}
        other => panic!("Expected InvalidTag at index 1, got: {other:?}"),
    }
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Valid registry parses successfully"
)]
fn valid_registry_parses_successfully(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Deterministic generation produces identical recipes"
)]
fn deterministic_generation_produces_identical_recipes(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Generated recipes stay within recipe bounds"
)]
fn generated_recipes_stay_within_recipe_bounds(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Tag selection stays within registry"
)]
fn tag_selection_stays_within_registry(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Invalid JSON fails parsing"
)]
fn invalid_json_fails_parsing(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Empty seeds array fails parsing"
)]
fn empty_seeds_array_fails_parsing(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Blank tag fails parsing"
)]
fn blank_tag_fails_parsing(world: World) {
    let _ = world;
}
