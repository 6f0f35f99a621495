//! Application constants.

/// Production endpoint of the Exbico supplier lead API.
pub const EXBICO_LEAD_API_URL: &str = "https://app.exbico.ru/api/leads/supplier/v1/credit-lead";

/// Input file read when `--file` is not given.
pub const DEFAULT_LEADS_FILE: &str = "leads.csv";

/// Fallback credential source when `--token` is not given.
pub const DEFAULT_TOKEN_FILE: &str = "token.txt";

// Worker pool bounds
pub const DEFAULT_THREADS: usize = 2;
pub const MAX_THREADS: usize = 10;

/// Exact length of an API token, in characters.
pub const TOKEN_LENGTH: usize = 32;

// Request headers
pub const HEADER_TOOL_VERSION: &str = "Tool-Version";
pub const TOOL_VERSION: &str = "v1";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Product category sent with every lead.
pub const PRODUCT_TYPE_ID: &str = "consumer";

/// Number of positional columns in an input row.
pub const INPUT_COLUMNS: usize = 14;

/// `chrono` format used for the default output file name.
pub const OUTPUT_FILE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H_%M_%S";

/// Labels of the echoed input columns in the result file.
pub const INPUT_HEADER: [&str; INPUT_COLUMNS] = [
    "Фамилия",
    "Имя",
    "Отчество",
    "Дата рождения",
    "Возраст",
    "Телефон",
    "E-mail",
    "Сумма кредита",
    "Срок кредита",
    "Регион",
    "Город",
    "Серия паспорта",
    "Номер паспорта",
    "Дата выдачи паспорта",
];

/// Labels of the columns derived from the submission outcome.
pub const RESULT_HEADER: [&str; 5] = [
    "Результат отправки",
    "Лид принят",
    "Причина отбраковки лида",
    "ID лида",
    "Дополнительная информация по приёму лида",
];
