mod debounce;
mod forms;
mod lifetime;
mod modal;
mod route;
