use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lang {
    Ru,
    En,
}

static CURRENT_LANG: AtomicU8 = AtomicU8::new(1); // 1=En (default)

pub fn lang() -> Lang {
    match CURRENT_LANG.load(Ordering::Relaxed) {
        0 => Lang::Ru,
        _ => Lang::En,
    }
}

pub fn set_lang(l: Lang) {
    CURRENT_LANG.store(
        match l {
            Lang::Ru => 0,
            Lang::En => 1,
        },
        Ordering::Relaxed,
    );
}

/// Translate a key to the current language.
pub fn t(key: &str) -> &'static str {
    let ru = lang() == Lang::Ru;
    match key {
        // ── Main menus ──────────────────────────────────────
        "menu.file" => if ru { "Файл" } else { "File" },
        "menu.quit" => if ru { "Выход" } else { "Quit" },

        "menu.edit" => if ru { "Правка" } else { "Edit" },
        "menu.reset_box" => if ru { "Сбросить куб  R" } else { "Reset box  R" },
        "menu.cancel_selection" => if ru { "Отменить выбор  Esc" } else { "Cancel selection  Esc" },

        "menu.view" => if ru { "Вид" } else { "View" },
        "menu.reset_camera" => if ru { "Сбросить камеру  Home" } else { "Reset camera  Home" },
        "menu.show_grid" => if ru { "Сетка" } else { "Grid" },
        "menu.show_axes" => if ru { "Оси" } else { "Axes" },
        "menu.language" => if ru { "Язык" } else { "Language" },

        "menu.settings" => if ru { "Настройки" } else { "Settings" },
        "menu.preferences" => if ru { "Параметры..." } else { "Preferences..." },

        // ── Status bar ──────────────────────────────────────
        "status.idle" => if ru { "Ожидание" } else { "Idle" },
        "status.face_selected" => if ru { "Грань выбрана" } else { "Face selected" },
        "status.box" => if ru { "Куб" } else { "Box" },
        "status.preview" => if ru { "Предпросмотр" } else { "Preview" },
        "status.hint_idle" => if ru {
            "Кликните по грани, чтобы начать выдавливание"
        } else {
            "Click a face to start extruding"
        },
        "status.hint_selected" => if ru {
            "Двигайте мышь и кликните, чтобы зафиксировать. Esc — отмена"
        } else {
            "Move the pointer and click to commit. Esc cancels"
        },

        // ── Events ──────────────────────────────────────────
        "event.face_selected" => if ru { "Выбрана грань" } else { "Face selected" },
        "event.committed" => if ru { "Размер зафиксирован" } else { "Dimension committed" },
        "event.reset" => if ru { "Куб сброшен" } else { "Box reset" },
        "event.cancelled" => if ru { "Выбор отменён" } else { "Selection cancelled" },
        "event.missed" => if ru { "Промах: выбор сохранён" } else { "Missed: selection kept" },
        "event.rejected" => if ru { "Эту грань нельзя выдавить" } else { "This face cannot be extruded" },

        // ── Dimensions ──────────────────────────────────────
        "dim.width" => if ru { "Ширина" } else { "Width" },
        "dim.height" => if ru { "Высота" } else { "Height" },
        "dim.depth" => if ru { "Глубина" } else { "Depth" },

        // ── Viewport overlays ───────────────────────────────
        "camera.distance" => if ru { "Расстояние" } else { "Distance" },
        "camera.yaw" => if ru { "Азимут" } else { "Yaw" },
        "camera.pitch" => if ru { "Наклон" } else { "Pitch" },
        "viewport.no_gl" => if ru { "OpenGL недоступен: каркасный режим" } else { "OpenGL unavailable: wireframe mode" },

        // ── Settings window ─────────────────────────────────
        "settings.title" => if ru { "Настройки" } else { "Settings" },

        "settings.extrusion" => if ru { "Выдавливание" } else { "Extrusion" },
        "settings.min_dimension" => if ru { "Минимальный размер" } else { "Minimum dimension" },
        "settings.commit_miss" => if ru { "Клик мимо плоскости" } else { "Click off the plane" },
        "settings.miss_keep" => if ru { "Сохранить выбор" } else { "Keep selection" },
        "settings.miss_cancel" => if ru { "Отменить выбор" } else { "Cancel selection" },
        "settings.miss_reuse" => if ru { "Взять последний предпросмотр" } else { "Reuse last preview" },
        "settings.highlight_color" => if ru { "Цвет выбранной грани" } else { "Selected face color" },

        "settings.grid" => if ru { "Сетка" } else { "Grid" },
        "settings.grid_visible" => if ru { "Показывать сетку" } else { "Show grid" },
        "settings.grid_size" => if ru { "Размер ячейки" } else { "Cell size" },
        "settings.grid_range" => if ru { "Количество линий" } else { "Grid lines" },
        "settings.grid_opacity" => if ru { "Прозрачность" } else { "Opacity" },

        "settings.axes" => if ru { "Оси координат" } else { "Axes" },
        "settings.axes_visible" => if ru { "Показывать оси" } else { "Show axes" },
        "settings.axes_length" => if ru { "Длина осей" } else { "Axis length" },
        "settings.axes_thickness" => if ru { "Толщина линий" } else { "Line thickness" },
        "settings.axes_labels" => if ru { "Показывать метки" } else { "Show labels" },

        "settings.viewport" => if ru { "Вьюпорт" } else { "Viewport" },
        "settings.bg_color" => if ru { "Цвет фона" } else { "Background color" },
        "settings.solid_color" => if ru { "Цвет тела" } else { "Solid color" },
        "settings.preview_color" => if ru { "Цвет предпросмотра" } else { "Preview color" },
        "settings.preview_alpha" => if ru { "Прозрачность предпросмотра" } else { "Preview opacity" },

        "settings.ui" => if ru { "Интерфейс" } else { "Interface" },
        "settings.font_size" => if ru { "Размер шрифта" } else { "Font size" },

        "settings.apply" => if ru { "Применить" } else { "Apply" },
        "settings.save" => if ru { "Сохранить" } else { "Save" },
        "settings.reset" => if ru { "Сбросить" } else { "Reset" },
        "settings.close" => if ru { "Закрыть" } else { "Close" },

        // ── Fallback ────────────────────────────────────────
        _ => "???",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_language() {
        set_lang(Lang::Ru);
        assert_eq!(t("menu.file"), "Файл");
        set_lang(Lang::En);
        assert_eq!(t("menu.file"), "File");
        assert_eq!(lang(), Lang::En);
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(t("no.such.key"), "???");
    }
}
