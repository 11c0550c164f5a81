//! Built-in window collection loaded at process start.
//!
//! # Invariants
//! - Ids and texts match the paired front-end verbatim.
//! - Ids are unique and numeric; all belong to the main screen placement.

use crate::model::window::{Priority, WindowRecord, WindowType};

type SeedRow = (
    &'static str,
    &'static str,
    WindowType,
    Priority,
    u32,
    &'static str,
);

const SEED_ROWS: &[SeedRow] = &[
    (
        "1",
        "Обновление",
        WindowType::System,
        Priority::High,
        1,
        "Блокирующий попап необходимости обновить приложение",
    ),
    (
        "2",
        "Покупки",
        WindowType::System,
        Priority::High,
        1,
        "Обработка и начисление отложенных покупок",
    ),
    (
        "3",
        "Win Streak Loose",
        WindowType::Event,
        Priority::Medium,
        2,
        "Отображение потери стрика",
    ),
    (
        "4",
        "Island Fail",
        WindowType::Event,
        Priority::Medium,
        2,
        "При проигрыше в ивенте",
    ),
    (
        "5",
        "Анлок фичи",
        WindowType::System,
        Priority::Medium,
        2,
        "Отображение анлока фичи (улетание шариков с иконки)",
    ),
    (
        "6",
        "New Booster",
        WindowType::Tutorial,
        Priority::Medium,
        2,
        "New Booster Open - перед уровнем с туториалом бустеров",
    ),
    (
        "7",
        "Нотификации",
        WindowType::System,
        Priority::Low,
        3,
        "Попап запроса разрешения на показ нотификаций (iOS only)",
    ),
    (
        "8",
        "Челлендж",
        WindowType::Progress,
        Priority::Medium,
        2,
        "Отображение изменения прогресса по челленджу",
    ),
    (
        "9",
        "Прогресс",
        WindowType::Progress,
        Priority::Medium,
        2,
        "Отображение других изменений прогресса после завершения уровня",
    ),
    (
        "10",
        "Сундук уровней",
        WindowType::Reward,
        Priority::High,
        1,
        "Открытие сундука уровней если он заполнился",
    ),
    (
        "11",
        "Сундук звёзд",
        WindowType::Reward,
        Priority::High,
        1,
        "Открытие сундука звёзд если он заполнился",
    ),
    (
        "12",
        "Промокоды",
        WindowType::Reward,
        Priority::High,
        1,
        "Начисление награды за промокоды",
    ),
    (
        "13",
        "New Pack",
        WindowType::Event,
        Priority::Medium,
        2,
        "New Pack Open - каждый холидей, 1 раз, при старте холидея",
    ),
    (
        "14",
        "Win Streak",
        WindowType::Reward,
        Priority::High,
        1,
        "Win Streak Reward - получение награды",
    ),
    (
        "15",
        "Island Progress",
        WindowType::Progress,
        Priority::Medium,
        2,
        "Island Progress - при каждом успешном выходе из уровня",
    ),
    (
        "16",
        "Collect Items",
        WindowType::Reward,
        Priority::High,
        1,
        "Collect Items Event Reward - при доступности получения награды",
    ),
    (
        "17",
        "Star Tournament",
        WindowType::Reward,
        Priority::High,
        1,
        "Star Tournament Reward - при доступности получения награды",
    ),
    (
        "18",
        "Boss Challenge",
        WindowType::Reward,
        Priority::High,
        1,
        "Boss Challenge Reward - при доступности получения награды",
    ),
    (
        "19",
        "Гонка",
        WindowType::Progress,
        Priority::Medium,
        2,
        "Прогресс гонки - если завершён этап, в котором пользователь принимал участие",
    ),
    (
        "20",
        "Харвест",
        WindowType::Progress,
        Priority::Medium,
        2,
        "Окно прогресса харвест ивента - если ивент завершён и пользователь принимал в нём участие",
    ),
    (
        "21",
        "Piggy Bank",
        WindowType::Offer,
        Priority::Medium,
        2,
        "Piggy Bank - при первом анлоке",
    ),
    (
        "22",
        "Collect Start",
        WindowType::Event,
        Priority::Medium,
        2,
        "Collect Items Event Start - однократно при старте нового ивента сбора предметов",
    ),
    (
        "23",
        "Star Tournament",
        WindowType::Event,
        Priority::Medium,
        2,
        "Star Tournament - однократно когда новый эвент доступен для старта",
    ),
    (
        "24",
        "Island Start",
        WindowType::Event,
        Priority::Medium,
        2,
        "Island Start - при старте ивента",
    ),
    (
        "25",
        "Honey Factory",
        WindowType::Event,
        Priority::Low,
        3,
        "Honey Factory - Annonce - В состоянии анонса, один раз в день",
    ),
    (
        "26",
        "Honey Factory",
        WindowType::Event,
        Priority::Medium,
        2,
        "Honey Factory - Start - В состоянии возможности старта, один раз за эвент",
    ),
    (
        "27",
        "Win Streak",
        WindowType::Event,
        Priority::Medium,
        2,
        "Win Streak Start - однократно в случае если запустился новый ивент вин стрик",
    ),
    (
        "28",
        "Челлендж оффер",
        WindowType::Offer,
        Priority::Low,
        3,
        "Челлендж оффер - периодически, период конфигурируется",
    ),
    (
        "29",
        "Бест-старт",
        WindowType::Offer,
        Priority::Medium,
        2,
        "Бест-старт оффер - один раз после каждого холодного старта",
    ),
    (
        "30",
        "Но-адс",
        WindowType::Offer,
        Priority::Low,
        3,
        "Но-адс оффер - при активации оффера и после просмотра каждых N реклам",
    ),
    (
        "31",
        "Чейн оффер",
        WindowType::Offer,
        Priority::Low,
        3,
        "Чейн оффер - один раз после каждого холодного старта",
    ),
    (
        "32",
        "Чуз ван",
        WindowType::Offer,
        Priority::Low,
        3,
        "Чуз ван оффер - один раз после каждого холодного старта",
    ),
    (
        "33",
        "Дейли бонус",
        WindowType::Reward,
        Priority::High,
        1,
        "Дейли бонус - если зарядился",
    ),
    (
        "34",
        "Челлендж",
        WindowType::Event,
        Priority::Medium,
        2,
        "Челлендж - если стартовал новый челендж",
    ),
    (
        "35",
        "Команда",
        WindowType::Tutorial,
        Priority::Medium,
        2,
        "Туториал о присоединении к команде - по достижении уровня когда открываются команды",
    ),
    (
        "36",
        "Гонка",
        WindowType::Event,
        Priority::Low,
        3,
        "Попап анонса/возможности старта гонки - один раз в календарный день",
    ),
    (
        "37",
        "Харвест",
        WindowType::Event,
        Priority::Low,
        3,
        "Окно возможности старта харвест ивента - один раз в календарный день",
    ),
    (
        "38",
        "Boss Challenge",
        WindowType::Event,
        Priority::Medium,
        2,
        "Boss Challenge - один раз в календарный день когда новый эвент доступен для старта",
    ),
    (
        "39",
        "Дейли челлендж",
        WindowType::Tutorial,
        Priority::Medium,
        2,
        "Туториал дейли челленджа - один раз при активации дейли челленджа",
    ),
];

/// Returns the default initial collection in its canonical order.
pub fn seed_windows() -> Vec<WindowRecord> {
    SEED_ROWS
        .iter()
        .map(|&(id, content, kind, priority, line, description)| {
            WindowRecord::new(id, content, kind, priority, line, description)
        })
        .collect()
}
