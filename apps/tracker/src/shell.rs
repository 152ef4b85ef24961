//! Console shell: menu rendering and action dispatch

use std::sync::Arc;

use domain_items::ItemStore;

use crate::actions::UserAction;
use crate::input::Input;
use crate::output::Output;

/// The session loop: render the menu, read a selection, dispatch
///
/// Registration order determines menu numbering; the loop runs until an
/// executed action reports termination.
pub struct StartShell {
    out: Arc<dyn Output>,
}

impl StartShell {
    pub fn new(out: Arc<dyn Output>) -> Self {
        Self { out }
    }

    /// Drive the session until an action returns false
    ///
    /// The selection read is only guaranteed to be an integer; the range
    /// check happens here, and an out-of-range selection re-loops without
    /// consuming an action.
    pub async fn run(
        &self,
        input: &mut dyn Input,
        store: &dyn ItemStore,
        actions: &[Box<dyn UserAction>],
    ) -> eyre::Result<()> {
        self.print_logo();

        let mut run = true;
        while run {
            self.show_menu(actions);
            let select = input.ask_int("Select: ")?;
            if select < 0 || select as usize >= actions.len() {
                self.out.println(&format!(
                    "Wrong input, you can select: 0 .. {}",
                    actions.len() - 1
                ));
                continue;
            }
            run = actions[select as usize].execute(input, store).await?;
        }

        Ok(())
    }

    fn print_logo(&self) {
        self.out.println("********************");
        self.out.println("Console Tracker");
        self.out.println("********************");
    }

    fn show_menu(&self, actions: &[Box<dyn UserAction>]) {
        self.out.println("Menu.");
        for (index, action) in actions.iter().enumerate() {
            self.out.println(&format!("{index}. {}", action.name()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{
        CreateAction, DeleteAction, ExitAction, FindByIdAction, FindByNameAction, ReplaceAction,
        ShowAllAction,
    };
    use crate::input::{StubInput, ValidatedInput};
    use crate::output::StubOutput;
    use domain_items::MemStore;

    fn build_actions(out: &Arc<StubOutput>) -> Vec<Box<dyn UserAction>> {
        let out = out.clone() as Arc<dyn Output>;
        vec![
            Box::new(CreateAction::new(out.clone())),
            Box::new(ShowAllAction::new(out.clone())),
            Box::new(ReplaceAction::new(out.clone())),
            Box::new(DeleteAction::new(out.clone())),
            Box::new(FindByIdAction::new(out.clone())),
            Box::new(FindByNameAction::new(out.clone())),
            Box::new(ExitAction::new(out)),
        ]
    }

    async fn run_session(answers: &[&str], store: &MemStore) -> Arc<StubOutput> {
        let out = Arc::new(StubOutput::new());
        let actions = build_actions(&out);
        let mut input =
            ValidatedInput::new(out.clone() as Arc<dyn Output>, StubInput::new(answers));
        let shell = StartShell::new(out.clone() as Arc<dyn Output>);

        shell.run(&mut input, store, &actions).await.unwrap();
        out
    }

    #[tokio::test]
    async fn test_create_then_exit_session() {
        let store = MemStore::new();
        let out = run_session(&["0", "New ticket", "Broken build", "6"], &store).await;

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "New ticket");

        let transcript = out.contents();
        assert!(transcript.contains("Console Tracker"));
        assert!(transcript.contains("Menu."));
        assert!(transcript.contains("0. Create a new Item"));
        assert!(transcript.contains("6. Exit"));
        assert!(transcript.ends_with("Goodbye!\n"));
    }

    #[tokio::test]
    async fn test_out_of_range_selection_reloops() {
        let store = MemStore::new();
        let out = run_session(&["7", "6"], &store).await;

        let transcript = out.contents();
        assert!(transcript.contains("Wrong input, you can select: 0 .. 6"));
        assert!(transcript.ends_with("Goodbye!\n"));
    }

    #[tokio::test]
    async fn test_negative_selection_reloops() {
        let store = MemStore::new();
        let out = run_session(&["-1", "6"], &store).await;

        assert!(out
            .contents()
            .contains("Wrong input, you can select: 0 .. 6"));
    }

    #[tokio::test]
    async fn test_non_integer_selection_is_retried_by_input() {
        let store = MemStore::new();
        let out = run_session(&["first", "6"], &store).await;

        let transcript = out.contents();
        assert!(transcript.contains("Wrong input, you can select..."));
        assert!(transcript.ends_with("Goodbye!\n"));
    }

    #[tokio::test]
    async fn test_menu_reprinted_every_iteration() {
        let store = MemStore::new();
        let out = run_session(&["1", "6"], &store).await;

        let transcript = out.contents();
        assert_eq!(transcript.matches("Menu.").count(), 2);
        assert!(transcript.contains("No items found."));
    }
}
