//! Plain-text view of the controller state.

use todo_sync::AppState;

pub fn render(state: &AppState) -> String {
    let mut lines = vec![format!("API: {}", state.api_base()), String::new()];

    if state.todos().is_empty() {
        lines.push("(no todos)".to_string());
    }
    for todo in state.todos() {
        let mark = if todo.done { "x" } else { " " };
        lines.push(format!("[{mark}] {}  ({})", todo.title, todo.id));
    }

    lines.push(String::new());
    lines.push("--- last response ---".to_string());
    lines.push(state.last_response().to_string());
    lines.join("\n") + "\n"
}
