pub const CARD: &str = "bg-white dark:bg-gray-800 p-8 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] max-w-2xl mx-auto";
pub const TEXT_H1: &str = "text-3xl font-bold mb-6 text-center text-gray-900 dark:text-white";
pub const TEXT_BODY: &str = "mb-4 text-center text-gray-700 dark:text-gray-300";
pub const TEXT_SCORE: &str = "text-center text-gray-800 dark:text-gray-200";
pub const TEXT_NOTICE: &str = "mt-2 text-center text-sm text-amber-600 dark:text-amber-400";
pub const BOARD_GRID: &str = "game-board grid grid-cols-4 gap-4 w-[320px] h-[320px] mx-auto touch-none select-none";
pub const TILE_BASE: &str = "w-[70px] h-[70px] flex items-center justify-center text-xl font-bold rounded transition-transform duration-100";
pub const TILE_MERGED: &str = "scale-110";
pub const TILE_NEW: &str = "animate-pulse";
pub const BUTTON_PRIMARY: &str = "px-4 py-2 bg-blue-500 text-white rounded hover:bg-blue-600 transition-colors";
pub const BUTTON_SECONDARY: &str = "px-4 py-2 rounded border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white hover:bg-gray-50 dark:hover:bg-gray-700 disabled:opacity-40 disabled:cursor-not-allowed";
pub const GAME_OVER_PANEL: &str = "mt-4 p-3 border-2 border-red-400 rounded-lg bg-red-50 dark:bg-red-900/20 text-center";

pub fn tile_color(value: u32) -> &'static str {
    match value {
        2 => "bg-gray-200 dark:bg-gray-700 text-gray-800 dark:text-gray-200",
        4 => "bg-gray-300 dark:bg-gray-600 text-gray-800 dark:text-gray-200",
        8 => "bg-orange-200 text-gray-800",
        16 => "bg-orange-300 text-gray-800",
        32 => "bg-orange-400 text-white",
        64 => "bg-orange-500 text-white",
        128 => "bg-yellow-200 text-gray-800",
        256 => "bg-yellow-300 text-gray-800",
        512 => "bg-yellow-400 text-white",
        1024 => "bg-yellow-500 text-white",
        2048 => "bg-yellow-600 text-white",
        0 => "bg-gray-100 dark:bg-gray-900",
        _ => "bg-gray-900 text-white",
    }
}
