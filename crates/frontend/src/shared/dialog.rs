//! Контейнер состояния диалога: открыт/закрыт + полезная нагрузка.
//!
//! Общий жизненный цикл всех модальных окон приложения, чтобы каждый экран
//! не собирал его заново из сигналов. Полезная нагрузка очищается не сразу,
//! а после короткой паузы — анимация закрытия не должна показывать пустую
//! форму. Пока диалог открыт, нагрузка гарантированно актуальна; читать её
//! при закрытом диалоге нельзя.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Пауза перед очисткой полезной нагрузки после закрытия, мс.
const CLEAR_DELAY_MS: u32 = 200;

pub struct DialogState<T: Clone + Send + Sync + 'static> {
    open: RwSignal<bool>,
    payload: RwSignal<Option<T>>,
    on_open: StoredValue<Option<Callback<Option<T>>>>,
    on_close: StoredValue<Option<Callback<()>>>,
}

impl<T: Clone + Send + Sync + 'static> Clone for DialogState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Clone + Send + Sync + 'static> Copy for DialogState<T> {}

impl<T: Clone + Send + Sync + 'static> Default for DialogState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + Sync + 'static> DialogState<T> {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
            payload: RwSignal::new(None),
            on_open: StoredValue::new(None),
            on_close: StoredValue::new(None),
        }
    }

    /// Вариант с колбэками: `on_open` получает полезную нагрузку открытия.
    pub fn with_callbacks(
        on_open: Option<Callback<Option<T>>>,
        on_close: Option<Callback<()>>,
    ) -> Self {
        Self {
            open: RwSignal::new(false),
            payload: RwSignal::new(None),
            on_open: StoredValue::new(on_open),
            on_close: StoredValue::new(on_close),
        }
    }

    pub fn open(&self, payload: Option<T>) {
        self.payload.set(payload.clone());
        self.open.set(true);
        if let Some(cb) = self.on_open.get_value() {
            cb.run(payload);
        }
    }

    pub fn open_empty(&self) {
        self.open(None);
    }

    pub fn close(&self) {
        self.open.set(false);
        if let Some(cb) = self.on_close.get_value() {
            cb.run(());
        }

        let open = self.open;
        let payload = self.payload;
        spawn_local(async move {
            TimeoutFuture::new(CLEAR_DELAY_MS).await;
            // диалог могли успеть открыть заново — тогда нагрузка уже его
            if !open.get_untracked() {
                payload.set(None);
            }
        });
    }

    pub fn toggle(&self) {
        if self.open.get_untracked() {
            self.close();
        } else {
            self.open(None);
        }
    }

    /// Реактивный флаг открытости.
    pub fn is_open(&self) -> Signal<bool> {
        self.open.into()
    }

    /// Реактивная полезная нагрузка.
    pub fn payload(&self) -> Signal<Option<T>> {
        self.payload.into()
    }

    /// Снимок нагрузки без подписки — для обработчиков событий.
    pub fn payload_now(&self) -> Option<T> {
        self.payload.get_untracked()
    }
}
