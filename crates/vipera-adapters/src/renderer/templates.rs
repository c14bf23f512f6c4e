//! Template text and placeholder expansion.
//!
//! Placeholders use the `{{NAME}}` form. Every value is taken from the
//! [`RenderContext`]; the expansion applies the full variable set to every
//! template, so adding a reference to an existing name in any template
//! requires no code change here.
//!
//! The generated text is the Swift/UIKit VIPER house style, quirks included:
//! the trailing double period in the header date, the `Interacter` class
//! spelling, and the MARK labels.

use vipera_core::domain::{RenderContext, Role};

/// Shared header comment; every artifact begins with this block.
const HEADER: &str = r#"//
//  {{FILE_STEM}}.swift
//  {{MODULE}}
//
//  Created by {{AUTHOR}} on {{YEAR}}. {{MONTH}}. {{DAY}}..
//  Copyright © {{YEAR}}. {{AUTHOR}}. All rights reserved.
//
"#;

pub(super) const CONTRACT: &str = r#"
import UIKit

//MARK: VIEW
protocol {{VIEW_PROTOCOL}}: class {

    var presenter: {{PRESENTATION_PROTOCOL}}? { get set }

}

//MARK: PRESENTER
protocol {{PRESENTATION_PROTOCOL}} {

    var view: {{VIEW_PROTOCOL}}? { get set }
    var router: {{WIREFRAME_PROTOCOL}}? { get set }
    var interactor: {{USE_CASE_PROTOCOL}}? { get set }

}

//MARK: PRESENTER
protocol {{USE_CASE_PROTOCOL}}: class {
    var service: {{SERVICE_INPUT_PROTOCOL}}? { get set }
    var output: {{INTERACTOR_OUTPUT_PROTOCOL}}? { get set }

}

protocol {{INTERACTOR_OUTPUT_PROTOCOL}}: BaseInteracterOutputProtocol {

}

//MARK: ROUTER
protocol {{WIREFRAME_PROTOCOL}}: BaseRouterProtocol {

    var viewController: UIViewController? { get set }

    static func assembleModule() -> UIViewController

}

//MARK: SERVIVE
protocol {{SERVICE_INPUT_PROTOCOL}}: class {
    var requestHandler: {{SERVICE_OUTPUT_PROTOCOL}}? { get set }
}

protocol {{SERVICE_OUTPUT_PROTOCOL}}: BaseServiceOutputProtocol {

}
"#;

pub(super) const VIEW: &str = r#"
import UIKit

class {{VIEW_CONTROLLER}}: BaseViewController, {{VIEW_PROTOCOL}} {

    //MARK: Properties

    var presenter: {{PRESENTATION_PROTOCOL}}?

    //MARK: UI Elments


    //MARK: Object LifeCycle

    override func initialize() {

    }

    //MARK: SetupView


}
"#;

pub(super) const INTERACTOR: &str = r#"
import Foundation

class {{INTERACTER}} {
    var service: {{SERVICE_INPUT_PROTOCOL}}?

    var output: {{INTERACTOR_OUTPUT_PROTOCOL}}?

}

//MARK: - {{USE_CASE_PROTOCOL}}
extension {{INTERACTER}}: {{USE_CASE_PROTOCOL}} {

}

//MARK: - {{SERVICE_OUTPUT_PROTOCOL}}
extension {{INTERACTER}}: {{SERVICE_OUTPUT_PROTOCOL}} {

    func onNoNetwork() {

    }

    func onErrorOccur(with error: String?) {

    }

}
"#;

pub(super) const PRESENTER: &str = r#"
import Foundation

class {{PRESENTER}} {

    weak var view: {{VIEW_PROTOCOL}}?

    var router: {{WIREFRAME_PROTOCOL}}?

    var interactor: {{USE_CASE_PROTOCOL}}?

}

//MARK: - {{PRESENTATION_PROTOCOL}}
extension {{PRESENTER}}: {{PRESENTATION_PROTOCOL}} {

}

//MARK: - {{INTERACTOR_OUTPUT_PROTOCOL}}
extension {{PRESENTER}}: {{INTERACTOR_OUTPUT_PROTOCOL}} {

    func didNoNetwork() {

    }

    func didErrorOccur(with error: String?) {

    }

}
"#;

pub(super) const ROUTER: &str = r#"
import UIKit

class {{ROUTER}}: {{WIREFRAME_PROTOCOL}} {

    weak var viewController: UIViewController?

    static func assembleModule() -> UIViewController {
        let view = {{VIEW_CONTROLLER}}()
        let presenter = {{PRESENTER}}()
        let router = {{ROUTER}}()
        let interacter = {{INTERACTER}}()
        let service = {{SERVICE}}()

        view.presenter = presenter

        presenter.view = view
        presenter.router = router
        presenter.interactor = interacter

        router.viewController = view

        interacter.output = presenter
        interacter.service = service

        service.requestHandler = interacter

        return view
    }

}
"#;

pub(super) const ENDPOINT: &str = r#"
import Foundation

enum {{ENDPOINT}} {

}

extension {{ENDPOINT}}: EndPointType {

    var path: String {
        return ""
    }

    var httpMethod: HTTPMethod {
        return .get
    }

    var task: HTTPTask {
        return .request
    }

    var headers: HTTPHeaders? {
        return nil
    }

    var body: Parameters? {
        return nil
    }

    var urlParams: Parameters? {
        return nil
    }

}
"#;

pub(super) const SERVICE: &str = r#"
import Foundation

class {{SERVICE}}: {{SERVICE_INPUT_PROTOCOL}} {
    weak var requestHandler: {{SERVICE_OUTPUT_PROTOCOL}}?
}
"#;

/// Expand one template: header block first, then the role's body, with the
/// full variable set substituted into both.
pub(super) fn expand(body: &str, role: Role, ctx: &RenderContext) -> String {
    let vars = substitutions(role, ctx);
    let mut out = String::with_capacity(HEADER.len() + body.len());
    out.push_str(HEADER);
    out.push_str(body);
    for (key, value) in &vars {
        out = out.replace(&format!("{{{{{key}}}}}"), value);
    }
    out
}

/// The full variable set for one (role, context) pair.
fn substitutions(role: Role, ctx: &RenderContext) -> Vec<(&'static str, String)> {
    let identity = ctx.identity();
    let date = ctx.date();
    vec![
        ("MODULE", identity.base_name().to_string()),
        ("FILE_STEM", identity.file_stem(role)),
        ("AUTHOR", ctx.author().to_string()),
        ("YEAR", date.year().to_string()),
        ("MONTH", date.month_padded()),
        ("DAY", date.day_padded()),
        // Protocols (declared by the contract)
        ("VIEW_PROTOCOL", identity.view_protocol()),
        ("PRESENTATION_PROTOCOL", identity.presentation_protocol()),
        ("USE_CASE_PROTOCOL", identity.use_case_protocol()),
        (
            "INTERACTOR_OUTPUT_PROTOCOL",
            identity.interactor_output_protocol(),
        ),
        ("WIREFRAME_PROTOCOL", identity.wireframe_protocol()),
        ("SERVICE_INPUT_PROTOCOL", identity.service_input_protocol()),
        ("SERVICE_OUTPUT_PROTOCOL", identity.service_output_protocol()),
        // Concrete types
        ("VIEW_CONTROLLER", identity.type_name(Role::View)),
        ("PRESENTER", identity.type_name(Role::Presenter)),
        ("ROUTER", identity.type_name(Role::Router)),
        ("INTERACTER", identity.type_name(Role::Interactor)),
        ("SERVICE", identity.type_name(Role::Service)),
        ("ENDPOINT", identity.type_name(Role::Endpoint)),
    ]
}
