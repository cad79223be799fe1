//! Interactive editor for one cell.

use std::io::ErrorKind;
use std::path::Path;

use chrono::Utc;
use dialoguer::{Error as DialoguerError, Input, Select};

use crate::app::api;
use crate::domain::{AppError, DayOfWeek, Hour, Notice, NoticeLevel, Preset, ShiftEditor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditAction {
    ToggleDayType,
    Start,
    End,
    Preset,
    Notes,
    AddTask,
    RemoveTask,
    Save,
    Delete,
    Cancel,
}

/// Actions offered for the editor's current state.
fn actions(editor: &ShiftEditor) -> Vec<(EditAction, String)> {
    let mut items = Vec::new();
    let day_type = if editor.is_day_off() { "Congé" } else { "Jour de travail" };
    items.push((EditAction::ToggleDayType, format!("Type de journée : {}", day_type)));
    if !editor.is_day_off() {
        items.push((EditAction::Start, format!("Heure de début : {}", editor.start())));
        items.push((EditAction::End, format!("Heure de fin : {}", editor.end())));
        items.push((EditAction::Preset, "Appliquer un horaire prédéfini".to_string()));
    }
    let notes = if editor.notes().is_empty() { "-" } else { editor.notes() };
    items.push((EditAction::Notes, format!("{} : {}", editor.notes_label(), notes)));
    if !editor.is_day_off() {
        items.push((EditAction::AddTask, "Ajouter une tâche".to_string()));
        if !editor.tasks().is_empty() {
            items.push((EditAction::RemoveTask, "Retirer une tâche".to_string()));
        }
    }
    items.push((EditAction::Save, editor.save_label().to_string()));
    if editor.is_editing() {
        items.push((EditAction::Delete, "Supprimer".to_string()));
    }
    items.push((EditAction::Cancel, "Annuler".to_string()));
    items
}

pub fn run_edit(config: Option<&Path>, personnel_id: &str, day: DayOfWeek) -> Result<(), AppError> {
    let mut session = api::open_session(config)?;
    let name = session.find_personnel(personnel_id)?.full_name();
    let mut editor = session.open_editor(personnel_id, day);

    loop {
        println!();
        println!("{} · {} · {}", editor.title(), name, day);
        if let Some(preview) = editor.preview() {
            println!("  {}", preview);
        }
        for (index, task) in editor.tasks().iter().enumerate() {
            println!("  {}. {}", index + 1, task);
        }

        let items = actions(&editor);
        let labels: Vec<&str> = items.iter().map(|(_, label)| label.as_str()).collect();
        let Some(selected) = Select::new()
            .with_prompt("Action")
            .items(&labels)
            .default(0)
            .interact_opt()
            .map_err(prompt_error)?
        else {
            return Ok(());
        };

        match items[selected].0 {
            EditAction::ToggleDayType => editor.set_day_off(!editor.is_day_off()),
            EditAction::Start => {
                if let Some(hour) = prompt_hour("Heure de début", editor.start())? {
                    editor.set_start(hour);
                }
            }
            EditAction::End => {
                if let Some(hour) = prompt_hour("Heure de fin", editor.end())? {
                    editor.set_end(hour);
                }
            }
            EditAction::Preset => {
                if let Some(preset) = prompt_preset()? {
                    editor.apply_preset(preset);
                }
            }
            EditAction::Notes => {
                if let Some(notes) = prompt_text(editor.notes_label(), editor.notes())? {
                    editor.set_notes(notes);
                }
            }
            EditAction::AddTask => {
                if let Some(task) = prompt_text("Nouvelle tâche", "")? {
                    editor.add_task(&task);
                }
            }
            EditAction::RemoveTask => {
                if let Some(index) = prompt_task(editor.tasks())? {
                    editor.remove_task(index)?;
                }
            }
            // On failure the editor stays open with its values so the user can retry.
            EditAction::Save => {
                let saved = session.save(&editor).is_ok();
                report(session.active_notice(Utc::now()));
                if saved {
                    return Ok(());
                }
            }
            EditAction::Delete => {
                let deleted = session.delete(personnel_id, day).is_ok();
                report(session.active_notice(Utc::now()));
                if deleted {
                    return Ok(());
                }
            }
            EditAction::Cancel => return Ok(()),
        }
    }
}

fn report(notice: Option<&Notice>) {
    match notice {
        Some(notice) if notice.level == NoticeLevel::Success => println!("✅ {}", notice.message),
        Some(notice) => eprintln!("❌ {}", notice.message),
        None => {}
    }
}

fn prompt_error(err: DialoguerError) -> AppError {
    AppError::Prompt(err.to_string())
}

fn prompt_hour(prompt: &str, current: Hour) -> Result<Option<Hour>, AppError> {
    let hours: Vec<Hour> = Hour::all().collect();
    let labels: Vec<String> = hours.iter().map(Hour::to_string).collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(usize::from(current.value()))
        .interact_opt()
        .map_err(prompt_error)?;
    Ok(selection.map(|index| hours[index]))
}

fn prompt_preset() -> Result<Option<Preset>, AppError> {
    let labels: Vec<String> = Preset::ALL.iter().map(Preset::to_string).collect();
    let selection = Select::new()
        .with_prompt("Horaire")
        .items(&labels)
        .default(0)
        .interact_opt()
        .map_err(prompt_error)?;
    Ok(selection.map(|index| Preset::ALL[index]))
}

fn prompt_task(tasks: &[String]) -> Result<Option<usize>, AppError> {
    Select::new()
        .with_prompt("Tâche à retirer")
        .items(tasks)
        .default(0)
        .interact_opt()
        .map_err(prompt_error)
}

fn prompt_text(prompt: &str, initial: &str) -> Result<Option<String>, AppError> {
    match Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()
    {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(prompt_error(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Shift, ShiftSpan};

    fn kinds(editor: &ShiftEditor) -> Vec<EditAction> {
        actions(editor).into_iter().map(|(action, _)| action).collect()
    }

    #[test]
    fn new_cell_offers_add_but_not_delete() {
        let editor = ShiftEditor::open("p1", DayOfWeek::Monday, None);
        let items = actions(&editor);
        assert!(
            items.iter().any(|(action, label)| *action == EditAction::Save && label == "Ajouter")
        );
        assert!(!kinds(&editor).contains(&EditAction::Delete));
        assert!(!kinds(&editor).contains(&EditAction::RemoveTask));
    }

    #[test]
    fn day_off_hides_hours_and_tasks() {
        let shift = Shift::day_off("Repos").with_tasks(["Ronde"]);
        let editor = ShiftEditor::open("p1", DayOfWeek::Monday, Some(&shift));
        let kinds = kinds(&editor);
        assert!(!kinds.contains(&EditAction::Start));
        assert!(!kinds.contains(&EditAction::AddTask));
        assert!(kinds.contains(&EditAction::Delete));
        assert!(actions(&editor).iter().any(|(_, label)| label.starts_with("Raison")));
    }

    #[test]
    fn work_shift_with_tasks_offers_removal() {
        let span = ShiftSpan::new(Hour::new(22).unwrap(), Hour::new(6).unwrap());
        let shift = Shift::work(span).with_tasks(["Ronde"]);
        let editor = ShiftEditor::open("p1", DayOfWeek::Monday, Some(&shift));
        let items = actions(&editor);
        assert!(items.iter().any(|(_, label)| label == "Heure de début : 22:00"));
        assert!(items.iter().any(|(action, _)| *action == EditAction::RemoveTask));
        assert!(items.iter().any(|(_, label)| label == "Mettre à jour"));
    }
}
