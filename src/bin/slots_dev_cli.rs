// src/bin/slots_dev_cli.rs

use slots_engine::api::{handle_command, handle_query, Command, CommandResponse, Query, SpinCommand};
use slots_engine::domain::caps::Caps;
use slots_engine::domain::reel::ReelLayout;
use slots_engine::engine::{SlotMachine, SpinSignal};
use slots_engine::infra::{IdGenerator, RngSeed, SystemRng};
use slots_engine::time_ctrl::{SessionClock, TimingRules};

/// Шаг симуляции времени: примерно кадр анимации.
const TICK_MS: u32 = 100;

fn main() {
    env_logger::init();

    println!("slots_dev_cli: стартуем dev-CLI слот-машины…");

    // Аргументы: [число спинов] [seed].
    // Без seed — системный RNG, с seed — детерминированный реплей.
    let mut args = std::env::args().skip(1);
    let spins: u32 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(10);
    let seed: Option<u64> = args.next().and_then(|s| s.parse().ok());

    match seed {
        Some(seed) => {
            println!("[CLI] Режим реплея: seed = {seed}");
            let mut rng = RngSeed::from_u64(seed).to_rng();
            run_session(spins, &mut rng);
        }
        None => {
            let mut rng = SystemRng;
            run_session(spins, &mut rng);
        }
    }

    println!("[CLI] Завершение работы dev-CLI.");
}

/// Полная игровая сессия: машина, баланс на стороне "фронта", спины по кругу.
fn run_session<R: slots_engine::engine::RandomSource>(spins: u32, rng: &mut R) {
    let id_gen = IdGenerator::new();
    let machine_id = id_gen.next_machine_id();

    let mut machine = SlotMachine::new(
        machine_id,
        ReelLayout::standard(),
        TimingRules::standard(),
        rng,
    );

    // Баланс кредитов — зона ответственности вызывающей стороны, не движка.
    let mut balance = Caps::new(10_000);
    let bet = Caps::new(10);

    // Сессионный таймер напоминаний живёт отдельно от машины.
    let mut session = SessionClock::standard();
    let mut session_ms_acc: u64 = 0;

    println!();
    println!("================ SLOT SESSION (machine {machine_id}) =================");

    for n in 0..spins {
        if balance < bet {
            println!("[CLI] Баланс {balance} меньше ставки {bet} — стоп.");
            break;
        }

        // Контракт: списываем ставку ДО запуска спина, независимо от исхода.
        balance -= bet;

        match handle_command(&mut machine, Command::Spin(SpinCommand { bet })) {
            Ok(CommandResponse::SpinAccepted { spin_id }) => {
                println!();
                println!("------ SPIN {spin_id} (#{:>2}) | bet {bet} ------", n + 1);
            }
            Ok(CommandResponse::SpinIgnored) => {
                println!("[CLI] Спин отклонён (машина крутится?) — странно для CLI.");
                balance += bet;
                continue;
            }
            Err(e) => {
                println!("[CLI] ОШИБКА команды: {e:?}");
                balance += bet;
                continue;
            }
        }

        // Тикаем время, пока машина не остановится.
        while machine.spinning {
            machine.on_time_passed(TICK_MS, rng);

            // SessionClock считает целые секунды — копим миллисекунды сами.
            session_ms_acc += TICK_MS as u64;
            if session_ms_acc >= 1000 {
                let secs = session_ms_acc / 1000;
                session_ms_acc %= 1000;
                if let Some(reminder) = session.on_time_passed(secs) {
                    println!(
                        "[CLI] Напоминание о перерыве: сессия идёт {} сек.",
                        reminder.session_secs
                    );
                }
            }
        }

        for signal in machine.drain_signals() {
            match signal {
                SpinSignal::SpinStarted { spin_id } => {
                    println!("[CLI] spin started: id={spin_id}");
                }
                SpinSignal::ReelSettled { reel, symbol } => {
                    println!("[CLI] reel {reel} settled: {symbol}");
                }
                SpinSignal::CollectionBonus => {
                    println!("[CLI] 🎉 ПОЛНАЯ КОЛЛЕКЦИЯ! Выплата удвоена.");
                }
                SpinSignal::JackpotFired => {
                    println!("[CLI] 💥 ДЖЕКПОТ! Выплата утроена.");
                }
                SpinSignal::SpinCompleted { payout, result, .. } => {
                    // Контракт: выплату к балансу применяет вызывающая сторона.
                    balance += payout;
                    println!(
                        "[CLI] spin completed: {:?}, payout {payout}, balance {balance}",
                        result.category
                    );
                }
            }
        }
    }

    println!();
    println!("================ FINAL MACHINE STATE =================");
    let view = handle_query(&machine, Query::GetMachine);
    match serde_json::to_string_pretty(&view) {
        Ok(json) => println!("{json}"),
        Err(e) => println!("[CLI] Не удалось сериализовать состояние: {e}"),
    }
    println!("[CLI] Итоговый баланс: {balance}");
}
