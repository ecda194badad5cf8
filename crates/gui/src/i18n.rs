use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Ru,
}

static CURRENT_LANG: AtomicU8 = AtomicU8::new(0); // 0=En (default)

pub fn lang() -> Lang {
    match CURRENT_LANG.load(Ordering::Relaxed) {
        1 => Lang::Ru,
        _ => Lang::En,
    }
}

pub fn set_lang(l: Lang) {
    CURRENT_LANG.store(
        match l {
            Lang::En => 0,
            Lang::Ru => 1,
        },
        Ordering::Relaxed,
    );
}

/// Translate a key to the current language.
pub fn t(key: &str) -> &'static str {
    let ru = lang() == Lang::Ru;
    match key {
        // ── Toolbar ─────────────────────────────────────────
        "tb.color" => if ru { "Цвет" } else { "Color" },
        "tb.draw" => if ru { "Рисовать" } else { "Draw" },
        "tb.del" => if ru { "Удалять" } else { "Del" },
        "tb.undo" => if ru { "Отменить" } else { "Undo" },
        "tb.redo" => if ru { "Повторить" } else { "Redo" },
        "tb.export" => if ru { "Экспорт..." } else { "Export..." },
        "tb.import" => if ru { "Импорт..." } else { "Import..." },
        "tb.reset" => if ru { "Сброс" } else { "Reset" },

        "tip.color" => if ru { "Цвет новых вокселей" } else { "Color for new voxels" },
        "tip.draw" => if ru { "Клик по грани добавляет воксель (D)" } else { "Clicking a face adds a voxel (D)" },
        "tip.del" => if ru { "Клик по вокселю удаляет его (X)" } else { "Clicking a voxel removes it (X)" },
        "tip.export" => if ru { "Сохранить воксели в JSON (Ctrl+E)" } else { "Save voxels as JSON (Ctrl+E)" },
        "tip.import" => if ru { "Загрузить воксели из JSON" } else { "Load voxels from JSON" },
        "tip.reset" => if ru { "Один серый воксель в центре" } else { "Single gray voxel at the origin" },

        // ── Dialogs ─────────────────────────────────────────
        "dialog.export_title" => if ru { "Экспорт вокселей" } else { "Export Voxels" },
        "dialog.import_title" => if ru { "Импорт вокселей" } else { "Import Voxels" },

        // ── Status bar ──────────────────────────────────────
        "status.voxels" => if ru { "Воксели" } else { "Voxels" },
        "status.remaining" => if ru { "осталось мест" } else { "capacity left" },
        "status.mode" => if ru { "Режим" } else { "Mode" },
        "status.mode_draw" => if ru { "рисование" } else { "draw" },
        "status.mode_del" => if ru { "удаление" } else { "delete" },

        // ── Viewport ────────────────────────────────────────
        "hint.nav" => {
            if ru {
                "Клик — грань • ЛКМ-драг — вращение • ПКМ-драг — сдвиг • колесо — орбита, Ctrl+колесо — масштаб"
            } else {
                "Click a face • drag to rotate • right-drag to pan • scroll to orbit, Ctrl+scroll to zoom"
            }
        }

        // ── Alerts ──────────────────────────────────────────
        "alert.title" => if ru { "Ошибка" } else { "Error" },
        "alert.ok" => if ru { "ОК" } else { "OK" },

        _ => {
            tracing::warn!("Missing i18n key: {key}");
            "??"
        }
    }
}
