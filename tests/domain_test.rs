//! Тесты доменной модели: символы, множества, крышки, барабаны, сетка.

use std::str::FromStr;

use slots_engine::domain::caps::Caps;
use slots_engine::domain::grid::Grid;
use slots_engine::domain::reel::{Reel, ReelLayout};
use slots_engine::domain::symbol::{symbol_to_bit, Symbol, SymbolSet};

//
// symbol.rs
//
#[test]
fn symbol_alphabet_is_closed_and_ordered() {
    assert_eq!(Symbol::COUNT, 6);
    assert_eq!(Symbol::ALL.len(), Symbol::COUNT);

    // Индексы совпадают с позицией в каноническом порядке.
    for (i, s) in Symbol::ALL.iter().enumerate() {
        assert_eq!(s.index(), i);
    }
}

#[test]
fn symbol_display_and_parse_roundtrip() {
    for s in Symbol::ALL {
        let text = s.to_string();
        let parsed = Symbol::from_str(&text).expect("known symbol must parse");
        assert_eq!(parsed, s);
    }

    // Регистронезависимость и мусор.
    assert_eq!(Symbol::from_str("ATOM").unwrap(), Symbol::Atom);
    assert!(Symbol::from_str("banana").is_err());
}

#[test]
fn symbol_set_insert_len_full_clear() {
    let mut set = SymbolSet::EMPTY;
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);

    set.insert(Symbol::Death);
    set.insert(Symbol::Death); // повтор не меняет размер
    assert_eq!(set.len(), 1);
    assert!(set.contains(Symbol::Death));
    assert!(!set.contains(Symbol::Atom));

    for s in Symbol::ALL {
        set.insert(s);
    }
    assert_eq!(set.len(), 6);
    assert!(set.is_full());

    set.clear();
    assert!(set.is_empty());
    assert!(!set.is_full());
}

#[test]
fn symbol_bits_are_distinct() {
    let mut mask = 0u8;
    for s in Symbol::ALL {
        let bit = symbol_to_bit(s);
        assert_eq!(mask & bit, 0, "bits must not overlap");
        mask |= bit;
    }
    assert_eq!(mask, SymbolSet::FULL.0);
}

//
// caps.rs
//
#[test]
fn caps_arithmetic_saturates() {
    let a = Caps::new(100);
    let b = Caps::new(40);

    assert_eq!(a + b, Caps::new(140));
    assert_eq!(a - b, Caps::new(60));
    // Вычитание не уходит в минус.
    assert_eq!(b - a, Caps::ZERO);
    assert_eq!(b.saturating_sub(a), Caps::ZERO);
}

#[test]
fn caps_payout_rounding_is_floor() {
    // Политика движка: floor один раз, в самом конце.
    assert_eq!(Caps::from_payout(37.5), Caps::new(37));
    assert_eq!(Caps::from_payout(30.0), Caps::new(30));
    assert_eq!(Caps::from_payout(0.999), Caps::ZERO);
    assert_eq!(Caps::from_payout(0.0), Caps::ZERO);
    assert_eq!(Caps::from_payout(-5.0), Caps::ZERO);
}

//
// reel.rs
//
#[test]
fn reel_layout_standard_geometry() {
    let layout = ReelLayout::standard();
    assert_eq!(layout.reel_count, 3);
    assert_eq!(layout.symbols_per_reel, 5);
    assert_eq!(layout.visible_window, 3);
    // Центр ленты из 5 символов — индекс 2.
    assert_eq!(layout.center_index(), 2);
}

#[test]
fn reel_scroll_shifts_and_injects_incoming() {
    let mut reel = Reel::new(
        vec![
            Symbol::Death,
            Symbol::Stim,
            Symbol::Target,
            Symbol::Gear,
            Symbol::Gun,
        ],
        2,
    );
    assert_eq!(reel.center_symbol(), Symbol::Target);

    reel.scroll_one(Symbol::Atom);
    // Лента сдвинулась на шаг, новый символ вошёл с края.
    assert_eq!(reel.symbols[0], Symbol::Atom);
    assert_eq!(reel.center_symbol(), Symbol::Stim);
    assert_eq!(reel.len(), 5);
}

#[test]
fn reel_visible_window_is_centered() {
    let reel = Reel::new(
        vec![
            Symbol::Death,
            Symbol::Stim,
            Symbol::Target,
            Symbol::Gear,
            Symbol::Gun,
        ],
        2,
    );

    let window = reel.visible(3);
    assert_eq!(window, vec![Symbol::Stim, Symbol::Target, Symbol::Gear]);
}

//
// grid.rs
//
#[test]
fn grid_counts_tally_occurrences() {
    let grid = Grid::new(vec![Symbol::Death, Symbol::Atom, Symbol::Death]);
    let counts = grid.counts();

    assert_eq!(counts[Symbol::Death.index()], 2);
    assert_eq!(counts[Symbol::Atom.index()], 1);
    assert_eq!(counts[Symbol::Stim.index()], 0);
    assert_eq!(counts.iter().map(|&c| c as usize).sum::<usize>(), grid.len());
}
