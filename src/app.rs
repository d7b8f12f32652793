use crate::cli::{Cli, Command, RoiArgs};
use crate::config::{self, Config};
use crate::economics::portfolio;
use crate::economics::{calculate_replacement_roi, RoiInput};
use crate::i18n::{self, Translator};
use crate::inventory::{Inventory, InventoryError};
use crate::lamp_db;
use crate::recommendation::{calculate_replacement, InputError};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] config::ConfigError),
    #[error("입력 오류: {0}")]
    Input(#[from] InputError),
    #[error("재고 파일 오류: {0}")]
    Inventory(#[from] InventoryError),
    #[error("램프 테이블에 없는 코드: {0}")]
    UnknownLamp(String),
    #[error("필수 인자 누락: --{0} (또는 --lamp)")]
    MissingArgument(&'static str),
}

/// 인자에 따라 하위 명령을 실행하거나 대화형 메뉴를 띄운다.
pub fn run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = match &cli.config {
        Some(path) => config::load_or_default_at(path)?,
        None => config::load_or_default()?,
    };
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    tracing::debug!(lang = %lang, config = %cfg.path().display(), "시작");

    match cli.command {
        Some(Command::Recommend(args)) => {
            let input = args.into_equipment();
            input.validate()?;
            let decision = calculate_replacement(&input, &cfg.policy);
            tracing::debug!(bulb_type = %input.bulb_type, priority = %decision.priority, "교체 판단");
            ui_cli::print_decision(&tr, &decision);
        }
        Some(Command::Roi(args)) => {
            let input = resolve_roi_input(&args)?;
            let result = calculate_replacement_roi(input);
            ui_cli::print_roi(&tr, &cfg, &result);
        }
        Some(Command::Batch { file }) => {
            let inventory = Inventory::load(&file)?;
            tracing::info!(file = %file.display(), items = inventory.items.len(), "재고 평가");
            let items = inventory.assess(&cfg.policy);
            let summary = portfolio::summarize(&items);
            ui_cli::print_batch(&tr, &cfg, &items, &summary);
        }
        Some(Command::Lamps) => ui_cli::print_lamps(&tr, &cfg),
        None => interactive(&mut cfg, &tr)?,
    }
    Ok(())
}

/// 대화형 메인 루프.
fn interactive(cfg: &mut Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        let outcome = match ui_cli::main_menu(tr)? {
            MenuChoice::Recommend => ui_cli::handle_recommend(tr, cfg),
            MenuChoice::Roi => ui_cli::handle_roi(tr, cfg),
            MenuChoice::Lamps => {
                ui_cli::print_lamps(tr, cfg);
                Ok(())
            }
            MenuChoice::Settings => ui_cli::handle_settings(tr, cfg)
                .and_then(|()| cfg.save().map_err(AppError::from)),
            MenuChoice::Exit => {
                cfg.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        };
        // 입력 실수는 메뉴로 돌아가고, 입출력 오류만 루프를 끝낸다
        match outcome {
            Err(AppError::Io(e)) => return Err(AppError::Io(e)),
            Err(e) => {
                tracing::warn!(error = %e, "메뉴 처리 실패");
                eprintln!("{}: {e}", tr.t(i18n::keys::ERROR_PREFIX));
            }
            Ok(()) => {}
        }
    }
    Ok(())
}

/// ROI 인자를 계산 입력으로 바꾼다. --lamp가 있으면 빠진 값을 테이블에서 채운다.
pub fn resolve_roi_input(args: &RoiArgs) -> Result<RoiInput, AppError> {
    let lamp = match &args.lamp {
        Some(code) => {
            Some(lamp_db::find_lamp(code).ok_or_else(|| AppError::UnknownLamp(code.clone()))?)
        }
        None => None,
    };
    let current = args
        .current
        .or(lamp.map(|l| l.typical_wattage))
        .ok_or(AppError::MissingArgument("current"))?;
    let replacement = args
        .replacement
        .or(lamp.map(|l| l.led_wattage))
        .ok_or(AppError::MissingArgument("replacement"))?;
    let cost = args
        .cost
        .or(lamp.map(|l| l.led_unit_cost))
        .ok_or(AppError::MissingArgument("cost"))?;
    Ok(
        RoiInput::new(current, replacement, args.hours, args.energy_cost, cost)
            .with_installation_cost(args.install),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roi_args() -> RoiArgs {
        RoiArgs {
            lamp: None,
            current: None,
            replacement: None,
            hours: 4000.0,
            energy_cost: 0.12,
            cost: None,
            install: 0.0,
        }
    }

    #[test]
    fn lamp_code_fills_missing_roi_values() {
        let args = RoiArgs {
            lamp: Some("mh-400".into()),
            cost: Some(250.0),
            ..roi_args()
        };
        let input = resolve_roi_input(&args).unwrap();
        assert_eq!(input.current_wattage, 458.0);
        assert_eq!(input.replacement_wattage, 150.0);
        assert_eq!(input.replacement_cost, 250.0);
    }

    #[test]
    fn missing_wattage_without_lamp_is_error() {
        assert!(matches!(
            resolve_roi_input(&roi_args()),
            Err(AppError::MissingArgument("current"))
        ));
    }

    #[test]
    fn unknown_lamp_code_is_error() {
        let args = RoiArgs {
            lamp: Some("XYZ".into()),
            ..roi_args()
        };
        assert!(matches!(
            resolve_roi_input(&args),
            Err(AppError::UnknownLamp(code)) if code == "XYZ"
        ));
    }
}
