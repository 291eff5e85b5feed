pub const PAGE: &str = "flex min-h-screen w-full";
pub const MAIN: &str = "flex-1 flex flex-col overflow-y-auto";
pub const MAIN_GRID: &str = "grid grid-cols-1 lg:grid-cols-[1fr_240px] gap-5 p-5 flex-1";
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-xl shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] p-5";
pub const CARD_CENTERED: &str = "bg-white dark:bg-gray-800 rounded-xl shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] p-5 flex flex-col items-center";
pub const SIDEBAR: &str = "w-56 shrink-0 bg-gray-100 dark:bg-gray-800/60 border-r-2 border-gray-200 dark:border-gray-700 p-5 overflow-y-auto max-h-screen";
pub const BUTTON_SECONDARY: &str = "w-full inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white hover:bg-gray-50 dark:hover:bg-gray-700 disabled:opacity-50 disabled:cursor-not-allowed";
pub const TEXTAREA: &str = "mt-2 mb-3 block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 font-mono text-sm text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 focus:ring-2 focus:ring-blue-600 resize-none";
pub const TEXT_H1: &str = "text-3xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H3: &str = "text-lg font-bold text-gray-900 dark:text-white mb-3";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-900 dark:text-white";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_HINT: &str = "text-xs text-gray-500 dark:text-gray-400 mt-1";
pub const ALERT_INFO: &str = "mt-2 p-2 rounded-md bg-gray-100 dark:bg-gray-700 text-xs font-medium text-gray-800 dark:text-gray-200";
pub const ALERT_ERROR: &str = "mt-2 p-2 rounded-md bg-red-50 dark:bg-red-900/50 text-xs font-medium text-red-700 dark:text-red-200";
