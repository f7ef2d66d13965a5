//! Tests for traversal order, filtered collection and tree rendering

use generational_arena::Index;

use bloodline::util::testing::init_test_setup;
use bloodline::{LineageArena, TreeNodeConvert, Vampire};

struct Scenario {
    arena: LineageArena,
    ansel: Index,
    selene: Index,
    sarah: Index,
    andrew: Index,
}

/// Ansel -> {Selene, Andrew}, Selene -> {Sarah}
fn ansel_scenario() -> Scenario {
    let mut arena = LineageArena::new();
    let ansel = arena
        .insert_node(Vampire::new("Ansel", 1400), None)
        .unwrap();
    let selene = arena
        .insert_node(Vampire::new("Selene", 1995), Some(ansel))
        .unwrap();
    let sarah = arena
        .insert_node(Vampire::new("Sarah", 2001), Some(selene))
        .unwrap();
    let andrew = arena
        .insert_node(Vampire::new("Andrew", 1850), Some(ansel))
        .unwrap();
    Scenario {
        arena,
        ansel,
        selene,
        sarah,
        andrew,
    }
}

fn names(arena: &LineageArena, indices: &[Index]) -> Vec<String> {
    indices
        .iter()
        .map(|&idx| arena.get_node(idx).unwrap().vampire.name.clone())
        .collect()
}

#[test]
fn given_lineage_when_iterating_preorder_then_self_before_offspring() {
    let s = ansel_scenario();

    let visited: Vec<&str> = s
        .arena
        .iter()
        .map(|(_, node)| node.vampire.name.as_str())
        .collect();
    assert_eq!(visited, vec!["Ansel", "Selene", "Sarah", "Andrew"]);
}

#[test]
fn given_lineage_when_iterating_postorder_then_offspring_before_maker() {
    let s = ansel_scenario();

    let visited: Vec<&str> = s
        .arena
        .iter_postorder()
        .map(|(_, node)| node.vampire.name.as_str())
        .collect();
    assert_eq!(visited, vec!["Sarah", "Selene", "Andrew", "Ansel"]);
}

#[test]
fn given_always_true_predicate_when_collecting_then_every_node_once_in_preorder() {
    let s = ansel_scenario();

    let collected = s.arena.collect_where(s.ansel, |_| true);

    assert_eq!(collected.len(), s.arena.len());
    assert_eq!(
        names(&s.arena, &collected),
        vec!["Ansel", "Selene", "Sarah", "Andrew"]
    );
}

#[test]
fn given_conversion_years_when_collecting_after_1980_then_millennials_in_order() {
    init_test_setup();
    let s = ansel_scenario();

    let millennials = s.arena.converted_after(s.ansel, 1980);

    assert_eq!(millennials, vec![s.selene, s.sarah]);
}

#[test]
fn given_no_matching_vampires_when_collecting_then_empty() {
    let s = ansel_scenario();

    let collected = s.arena.converted_after(s.ansel, 3000);

    assert!(collected.is_empty());
}

#[test]
fn given_subtree_start_when_collecting_then_limited_to_that_line() {
    let s = ansel_scenario();

    let collected = s.arena.collect_where(s.selene, |_| true);

    assert_eq!(collected, vec![s.selene, s.sarah]);
}

#[test]
fn given_lineage_when_collecting_childless_then_leaves_in_preorder() {
    let s = ansel_scenario();

    assert_eq!(s.arena.childless(), vec![s.sarah, s.andrew]);
}

#[test]
fn given_lineage_when_counting_generations_then_longest_line() {
    let mut s = ansel_scenario();

    assert_eq!(s.arena.generations(), 3);

    // a lone second original does not shorten the longest line
    s.arena
        .insert_node(Vampire::new("Dracula", 1431), None)
        .unwrap();
    assert_eq!(s.arena.generations(), 3);
}

#[test]
fn given_empty_arena_when_counting_generations_then_zero() {
    let arena = LineageArena::new();

    assert_eq!(arena.generations(), 0);
    assert!(arena.is_empty());
}

#[test]
fn given_lineage_when_rendering_then_indented_tree() {
    let expected = "Ansel (1400)
├── Selene (1995)
│   └── Sarah (2001)
└── Andrew (1850)\n";

    let s = ansel_scenario();

    let rendered = s.arena.to_tree_string(s.ansel).to_string();
    assert_eq!(rendered, expected);
}
