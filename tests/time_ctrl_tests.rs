//! Тесты контроля времени: правила тайминга, таймер барабана, сессия.

use slots_engine::time_ctrl::{ReelClock, SessionClock, TimingRules};

//
// TimingRules.
//
#[test]
fn standard_timing_staggers_by_half_second() {
    let rules = TimingRules::standard();

    // 2000 + 500 * index.
    assert_eq!(rules.duration_ms(0), 2000);
    assert_eq!(rules.duration_ms(1), 2500);
    assert_eq!(rules.duration_ms(2), 3000);

    // 3 + index оборотов.
    assert_eq!(rules.rotations(0), 3);
    assert_eq!(rules.rotations(1), 4);
    assert_eq!(rules.rotations(2), 5);
}

//
// ReelClock.
//
#[test]
fn clock_emits_total_steps_over_full_duration() {
    let rules = TimingRules::standard();
    let mut clock = ReelClock::start(0, &rules, 5);
    assert_eq!(clock.total_steps, 15); // 3 оборота * 5 символов

    let mut steps = 0u32;
    let mut finishes = 0u32;
    for _ in 0..20 {
        let tick = clock.advance(100);
        steps += tick.steps;
        if tick.just_finished {
            finishes += 1;
        }
    }

    assert_eq!(steps, 15, "every symbol boundary crossed exactly once");
    assert_eq!(finishes, 1);
    assert!(clock.finished);
    assert_eq!(clock.remaining_ms(), 0);
}

#[test]
fn clock_floors_steps_mid_flight() {
    let rules = TimingRules::standard();
    let mut clock = ReelClock::start(0, &rules, 5);

    // 15 шагов за 2000 мс: граница каждые 133.3 мс.
    // За первые 100 мс ни одна граница не пересечена.
    let tick = clock.advance(100);
    assert_eq!(tick.steps, 0);
    assert!(!tick.just_finished);

    // К 200 мс пересечена ровно одна.
    let tick = clock.advance(100);
    assert_eq!(tick.steps, 1);
}

#[test]
fn clock_snaps_to_boundary_on_finish() {
    let rules = TimingRules::standard();
    let mut clock = ReelClock::start(0, &rules, 5);

    // Один огромный тик: все шаги разом, финиш засчитан один раз.
    let tick = clock.advance(1_000_000);
    assert_eq!(tick.steps, 15);
    assert!(tick.just_finished);

    // Мёртвый таймер больше ничего не отдаёт.
    let tick = clock.advance(1_000_000);
    assert_eq!(tick.steps, 0);
    assert!(!tick.just_finished);
}

#[test]
fn clock_step_count_is_tick_size_independent() {
    let rules = TimingRules::standard();

    let total = |tick_ms: u32| {
        let mut clock = ReelClock::start(2, &rules, 5);
        let mut steps = 0u32;
        while !clock.finished {
            steps += clock.advance(tick_ms).steps;
        }
        steps
    };

    // 16, 100 и 3000 мс дают одинаковое суммарное число шагов.
    assert_eq!(total(16), 25);
    assert_eq!(total(100), 25);
    assert_eq!(total(3000), 25);
}

//
// SessionClock.
//
#[test]
fn session_reminds_every_thirty_minutes() {
    let mut session = SessionClock::standard();

    // 29 минут 59 секунд: тишина.
    assert!(session.on_time_passed(1799).is_none());

    // Секунда спустя — первое напоминание.
    let reminder = session.on_time_passed(1).expect("boundary crossed");
    assert_eq!(reminder.session_secs, 1800);

    // Внутри следующего периода тишина, на границе — снова напоминание.
    assert!(session.on_time_passed(900).is_none());
    let reminder = session.on_time_passed(900).expect("second boundary");
    assert_eq!(reminder.session_secs, 3600);
}

#[test]
fn session_big_jump_still_yields_a_reminder() {
    let mut session = SessionClock::standard();

    // Пропустили несколько границ одним скачком: одно напоминание,
    // с фактическим временем сессии.
    let reminder = session.on_time_passed(4000).expect("boundaries crossed");
    assert_eq!(reminder.session_secs, 4000);
}

#[test]
fn zero_period_never_reminds() {
    let mut session = SessionClock {
        elapsed_secs: 0,
        reminder_every_secs: 0,
    };
    assert!(session.on_time_passed(10_000).is_none());
}
